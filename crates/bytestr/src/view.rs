// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Non-owning, zero-copy views over byte ranges.

use crate::ops::concat_at;
use crate::{BufferError, ByteBuffer, ByteSource};
use byte_alloc::Allocator;
use std::panic::Location;

/// A read-only window `[start, start + len)` into a referent byte range.
///
/// The referent is either a fixed range (a literal, a slice) or the content
/// of a [`ByteBuffer`] at the time the view was made. A view never copies
/// and never owns.
///
/// # Validity
/// A view borrows its referent, so the borrow checker rejects any attempt to
/// mutate, grow or release a buffer while a view over it is alive. The
/// storage a view points at therefore cannot move under it.
///
/// ```compile_fail
/// use byte_alloc::HeapAllocator;
/// use bytestr::{ops, ByteBuffer, ByteView};
///
/// let heap = HeapAllocator::new();
/// let mut b = ByteBuffer::new("hello", &heap).unwrap();
/// let v = ByteView::new(&b, 0, 5).unwrap();
/// ops::push_back(&mut b, b'!', &heap).unwrap(); // `b` is borrowed by `v`
/// assert_eq!(v.len(), 5);
/// ```
#[derive(Clone, Copy)]
pub struct ByteView<'a> {
    referent: &'a [u8],
    start: usize,
    len: usize,
}

impl<'a> ByteView<'a> {
    /// Creates a view of `len` bytes of `referent`, starting at `start`.
    ///
    /// # Errors
    /// Returns [`BufferError::SubstringBoundsViolation`] if the range does not
    /// fit in the referent.
    ///
    /// # Examples
    /// ```
    /// use bytestr::ByteView;
    ///
    /// let v = ByteView::new("Hello world", 0, 5).unwrap();
    /// assert_eq!(v.as_bytes(), b"Hello");
    /// ```
    #[track_caller]
    pub fn new<S: ByteSource + ?Sized>(referent: &'a S, start: usize, len: usize) -> Result<Self, BufferError> {
        Self::over(referent.source_bytes(), start, len, "view", Location::caller())
    }

    /// Creates a view over the whole of `referent`.
    pub fn whole<S: ByteSource + ?Sized>(referent: &'a S) -> Self {
        let referent = referent.source_bytes();
        Self {
            referent,
            start: 0,
            len: referent.len(),
        }
    }

    fn over(
        referent: &'a [u8],
        start: usize,
        len: usize,
        op: &'static str,
        at: &'static Location<'static>,
    ) -> Result<Self, BufferError> {
        let fits = start
            .checked_add(len)
            .is_some_and(|end| end <= referent.len());
        if !fits {
            return Err(BufferError::substring(op, at, start, len, referent.len()));
        }
        Ok(Self { referent, start, len })
    }

    /// Creates a view of `len` bytes of this view, starting at its logical
    /// index `start`. The result borrows the underlying referent, not `self`.
    #[track_caller]
    pub fn subview(&self, start: usize, len: usize) -> Result<ByteView<'a>, BufferError> {
        let at = Location::caller();
        let fits = start.checked_add(len).is_some_and(|end| end <= self.len);
        if !fits {
            return Err(BufferError::substring("subview", at, start, len, self.len));
        }
        Self::over(self.referent, self.start + start, len, "subview", at)
    }

    /// Number of bytes in the view.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the view covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the view's first byte within its referent.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Reads the byte at logical index `index`, i.e. `referent[start + index]`.
    ///
    /// Returns [`BufferError::BoundsViolation`] if `index >= len()`.
    #[track_caller]
    pub fn get(&self, index: usize) -> Result<u8, BufferError> {
        if index >= self.len {
            return Err(BufferError::bounds("view_get", Location::caller(), index, 1, self.len));
        }
        Ok(self.referent[self.start + index])
    }

    /// The viewed bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.referent[self.start..self.start + self.len]
    }

    /// Iterates over the viewed bytes. Iterating again starts over.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'a, u8>> {
        self.as_bytes().iter().copied()
    }

    /// Allocates a new buffer holding this view's bytes followed by `other`'s.
    ///
    /// The buffer's capacity is exactly `self.len() + other.len()`.
    ///
    /// # Examples
    /// ```
    /// use byte_alloc::HeapAllocator;
    /// use bytestr::ByteView;
    ///
    /// let heap = HeapAllocator::new();
    /// let hello = ByteView::new("Hello world", 0, 5).unwrap();
    /// let bang = ByteView::new("!!!", 0, 3).unwrap();
    /// let joined = hello.concat(&bang, &heap).unwrap();
    /// assert_eq!(joined.as_bytes(), b"Hello!!!");
    /// ```
    #[track_caller]
    pub fn concat<A: Allocator + ?Sized>(&self, other: &ByteView<'_>, alloc: &A) -> Result<ByteBuffer, BufferError> {
        concat_at(self, other, "view_concat", Location::caller(), alloc)
    }
}

impl ByteSource for ByteView<'_> {
    fn source_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::whole(bytes)
    }
}

impl<'a> From<&'a str> for ByteView<'a> {
    fn from(s: &'a str) -> Self {
        Self::whole(s)
    }
}

impl<'a> From<&'a ByteBuffer> for ByteView<'a> {
    fn from(buffer: &'a ByteBuffer) -> Self {
        Self::whole(buffer)
    }
}

impl<'a> IntoIterator for ByteView<'a> {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for ByteView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteView<'_> {}

impl PartialEq<[u8]> for ByteView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for ByteView<'_> {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl std::fmt::Debug for ByteView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteView")
            .field("start", &self.start)
            .field("len", &self.len)
            .field("bytes", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byte_alloc::HeapAllocator;

    #[test]
    fn test_view_literal() {
        let v = ByteView::new("Hello world", 0, 5).unwrap();
        assert_eq!(v, b"Hello");
        assert_eq!(v.len(), 5);
        assert_eq!(v.start(), 0);
    }

    #[test]
    fn test_view_offset() {
        let v = ByteView::new("Hello world", 6, 5).unwrap();
        assert_eq!(v, b"world");
        assert_eq!(v.get(0).unwrap(), b'w');
        assert_eq!(v.get(4).unwrap(), b'd');
    }

    #[test]
    fn test_view_get_out_of_range() {
        let v = ByteView::new("Hello world", 6, 3).unwrap();
        assert!(matches!(
            v.get(3),
            Err(BufferError::BoundsViolation { op: "view_get", index: 3, size: 3, .. })
        ));
    }

    #[test]
    fn test_view_too_long() {
        assert!(matches!(
            ByteView::new("abc", 0, 4),
            Err(BufferError::SubstringBoundsViolation { op: "view", source_len: 3, .. })
        ));
        assert!(ByteView::new("abc", 2, 2).is_err());
        assert!(ByteView::new("abc", usize::MAX, 2).is_err());
        assert!(ByteView::new("abc", 3, 0).unwrap().is_empty());
    }

    #[test]
    fn test_view_over_buffer() {
        let heap = HeapAllocator::new();
        let b = ByteBuffer::new("buffer content", &heap).unwrap();
        let v = ByteView::new(&b, 7, 7).unwrap();
        assert_eq!(v, b"content");
        let whole = ByteView::from(&b);
        assert_eq!(whole.len(), b.len());
    }

    #[test]
    fn test_view_does_not_see_terminator() {
        let heap = HeapAllocator::new();
        let b = ByteBuffer::new("abc", &heap).unwrap();
        assert!(ByteView::new(&b, 0, 4).is_err());
    }

    #[test]
    fn test_subview() {
        let v = ByteView::new("Hello world", 6, 5).unwrap();
        let sub = v.subview(1, 3).unwrap();
        assert_eq!(sub, b"orl");
        assert_eq!(sub.start(), 7);
        assert!(v.subview(3, 3).is_err());
    }

    #[test]
    fn test_subview_outlives_parent_view() {
        let text = String::from("outer text");
        let sub = {
            let outer = ByteView::whole(&text);
            outer.subview(6, 4).unwrap()
        };
        assert_eq!(sub, b"text");
    }

    #[test]
    fn test_iteration_is_restartable() {
        let v = ByteView::new("abcdef", 1, 3).unwrap();
        let first: Vec<u8> = v.iter().collect();
        let second: Vec<u8> = v.into_iter().collect();
        assert_eq!(first, b"bcd");
        assert_eq!(first, second);
    }

    #[test]
    fn test_concat() {
        let heap = HeapAllocator::new();
        let a = ByteView::new("Hello world", 0, 5).unwrap();
        let b = ByteView::new("!!!", 0, 3).unwrap();
        let joined = a.concat(&b, &heap).unwrap();
        assert_eq!(joined, b"Hello!!!");
        assert_eq!(joined.len(), 8);
        assert_eq!(joined.as_bytes_with_nul(), b"Hello!!!\0");
        assert_eq!(a, b"Hello");
        assert_eq!(b, b"!!!");
    }

    #[test]
    fn test_concat_uses_view_offsets() {
        let heap = HeapAllocator::new();
        let a = ByteView::new("xxabyy", 2, 2).unwrap();
        let b = ByteView::new("..cd", 2, 2).unwrap();
        let joined = a.concat(&b, &heap).unwrap();
        assert_eq!(joined, b"abcd");
    }

    #[test]
    fn test_from_impls() {
        let bytes: &[u8] = b"raw";
        assert_eq!(ByteView::from(bytes), b"raw");
        assert_eq!(ByteView::from("lit"), b"lit");
    }

    #[test]
    fn test_debug_format() {
        let v = ByteView::new("abc", 1, 2).unwrap();
        let debug = format!("{v:?}");
        assert!(debug.contains("ByteView"));
        assert!(debug.contains("\"bc\""));
    }
}
