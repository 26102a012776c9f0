// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Whole-buffer replacement: resize and assign.

use crate::{BufferError, ByteBuffer, ByteSource};
use byte_alloc::Allocator;
use std::panic::Location;

/// Replaces the whole content with `new_size` copies of `fill`.
///
/// This is destructive: the old content is discarded even when shrinking, so
/// `resize` on `"hello world"` to 12 with `b'h'` yields twelve `h`s, not
/// `"hello worldh"`. Capacity grows as if the buffer were cleared and then
/// appended to one byte at a time.
///
/// # Examples
/// ```
/// use byte_alloc::HeapAllocator;
/// use bytestr::{ops, ByteBuffer};
///
/// let heap = HeapAllocator::new();
/// let mut b = ByteBuffer::new("hello world", &heap).unwrap();
/// ops::resize(&mut b, 12, b'h', &heap).unwrap();
/// assert_eq!(b.as_bytes(), b"hhhhhhhhhhhh");
/// ```
#[track_caller]
pub fn resize<A: Allocator + ?Sized>(
    buffer: &mut ByteBuffer,
    new_size: usize,
    fill: u8,
    alloc: &A,
) -> Result<(), BufferError> {
    let at = Location::caller();
    buffer.reserve_for_refill(0, new_size, "resize", at, alloc)?;
    buffer.raw_mut()[..new_size].fill(fill);
    buffer.set_len(new_size);
    Ok(())
}

/// Replaces the whole content with a copy of `bytes`.
#[track_caller]
pub fn assign<S, A>(buffer: &mut ByteBuffer, bytes: &S, alloc: &A) -> Result<(), BufferError>
where
    S: ByteSource + ?Sized,
    A: Allocator + ?Sized,
{
    let at = Location::caller();
    let bytes = bytes.source_bytes();
    buffer.reserve_for_refill(0, bytes.len(), "assign", at, alloc)?;
    buffer.raw_mut()[..bytes.len()].copy_from_slice(bytes);
    buffer.set_len(bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use byte_alloc::{ArenaAllocator, HeapAllocator, MemoryBudget};

    #[test]
    fn test_resize_is_destructive() {
        let heap = HeapAllocator::new();
        let mut b = ByteBuffer::new("hello world", &heap).unwrap();
        resize(&mut b, 12, b'h', &heap).unwrap();
        assert_eq!(b, b"hhhhhhhhhhhh");
        assert_eq!(b.len(), 12);
    }

    #[test]
    fn test_resize_smaller_does_not_keep_prefix() {
        let heap = HeapAllocator::new();
        let mut b = ByteBuffer::new("hello", &heap).unwrap();
        resize(&mut b, 3, b'z', &heap).unwrap();
        assert_eq!(b, b"zzz");
        assert_eq!(b.capacity(), 16);
    }

    #[test]
    fn test_resize_to_zero() {
        let heap = HeapAllocator::new();
        let mut b = ByteBuffer::new("hello", &heap).unwrap();
        resize(&mut b, 0, b'z', &heap).unwrap();
        assert!(b.is_empty());
        assert_eq!(b.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn test_resize_growth() {
        let heap = HeapAllocator::new();
        let mut b = ByteBuffer::new("ab", &heap).unwrap();
        resize(&mut b, 20, b'.', &heap).unwrap();
        assert_eq!(b.capacity(), 32);
    }

    #[test]
    fn test_resize_failure_keeps_content() {
        let arena = ArenaAllocator::new(MemoryBudget::from_bytes(20));
        let mut b = ByteBuffer::new("hello", &arena).unwrap();
        assert!(resize(&mut b, 100, b'x', &arena).is_err());
        assert_eq!(b, b"hello");
    }

    #[test]
    fn test_assign() {
        let heap = HeapAllocator::new();
        let mut b = ByteBuffer::new("old content", &heap).unwrap();
        assign(&mut b, "new", &heap).unwrap();
        assert_eq!(b, b"new");
        assert_eq!(b.as_bytes_with_nul(), b"new\0");
        assert_eq!(b.capacity(), 22);
    }

    #[test]
    fn test_assign_longer() {
        let heap = HeapAllocator::new();
        let mut b = ByteBuffer::new("", &heap).unwrap();
        let long = [b'q'; 40];
        assign(&mut b, &long, &heap).unwrap();
        assert_eq!(b.len(), 40);
        assert_eq!(b.capacity(), 64);
    }
}
