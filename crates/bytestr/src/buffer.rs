// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The growable, null-terminated byte buffer.

use crate::{BufferConfig, BufferError, ByteSource};
use byte_alloc::{Allocator, Storage};
use std::panic::Location;

/// A growable byte sequence with tracked size and capacity.
///
/// # Memory Layout
/// The buffer owns one [`Storage`] region of `capacity + 1` bytes. The first
/// `len()` bytes are content and the byte at index `len()` is always `0`, so
/// [`as_bytes_with_nul`](ByteBuffer::as_bytes_with_nul) can be handed to
/// anything expecting a terminated string.
///
/// # Invariants
/// - `len() <= capacity()`
/// - the byte at index `len()` is `0`
/// - `capacity()` never shrinks
///
/// # Lifetime
/// A buffer is created through an [`Allocator`] and returned to it with
/// [`release`](ByteBuffer::release). Dropping a buffer without releasing it
/// frees the memory but the allocator never sees it come back.
pub struct ByteBuffer {
    storage: Storage,
    size: usize,
    growth_factor: usize,
}

impl ByteBuffer {
    /// Creates a buffer holding a copy of `content`, using the default
    /// [`BufferConfig`].
    ///
    /// # Examples
    /// ```
    /// use byte_alloc::HeapAllocator;
    /// use bytestr::ByteBuffer;
    ///
    /// let heap = HeapAllocator::new();
    /// let b = ByteBuffer::new("hello world", &heap).unwrap();
    /// assert_eq!(b.len(), 11);
    /// assert_eq!(b.capacity(), 22);
    /// assert_eq!(b.as_bytes_with_nul(), b"hello world\0");
    /// ```
    #[track_caller]
    pub fn new<S, A>(content: &S, alloc: &A) -> Result<Self, BufferError>
    where
        S: ByteSource + ?Sized,
        A: Allocator + ?Sized,
    {
        Self::create(content, &BufferConfig::default(), "new", Location::caller(), alloc)
    }

    /// Creates a buffer holding a copy of `content`.
    ///
    /// Capacity is `max(config.default_capacity, growth_factor × len)`, which
    /// leaves headroom for appends. Returns [`BufferError::Config`] if
    /// `config` fails [`BufferConfig::validate`].
    #[track_caller]
    pub fn with_config<S, A>(content: &S, config: &BufferConfig, alloc: &A) -> Result<Self, BufferError>
    where
        S: ByteSource + ?Sized,
        A: Allocator + ?Sized,
    {
        config.validate()?;
        Self::create(content, config, "with_config", Location::caller(), alloc)
    }

    /// Creates an empty buffer with exactly `capacity` bytes of room.
    #[track_caller]
    pub fn with_capacity<A: Allocator + ?Sized>(capacity: usize, alloc: &A) -> Result<Self, BufferError> {
        Self::allocate_empty(
            capacity,
            BufferConfig::default().growth_factor,
            "with_capacity",
            Location::caller(),
            alloc,
        )
    }

    fn create<S, A>(
        content: &S,
        config: &BufferConfig,
        op: &'static str,
        at: &'static Location<'static>,
        alloc: &A,
    ) -> Result<Self, BufferError>
    where
        S: ByteSource + ?Sized,
        A: Allocator + ?Sized,
    {
        let bytes = content.source_bytes();
        let headroom = bytes
            .len()
            .checked_mul(config.growth_factor)
            .ok_or_else(|| BufferError::alloc(op, at, byte_alloc::AllocError::CapacityOverflow))?;
        let capacity = config.default_capacity.max(headroom).max(bytes.len());

        let mut buffer = Self::allocate_empty(capacity, config.growth_factor, op, at, alloc)?;
        buffer.storage.as_mut_slice()[..bytes.len()].copy_from_slice(bytes);
        buffer.set_len(bytes.len());
        Ok(buffer)
    }

    /// Allocates `capacity + 1` bytes and writes the terminator.
    pub(crate) fn allocate_empty<A: Allocator + ?Sized>(
        capacity: usize,
        growth_factor: usize,
        op: &'static str,
        at: &'static Location<'static>,
        alloc: &A,
    ) -> Result<Self, BufferError> {
        let byte_count = capacity
            .checked_add(1)
            .ok_or_else(|| BufferError::alloc(op, at, byte_alloc::AllocError::CapacityOverflow))?;
        let storage = alloc
            .allocate(byte_count)
            .map_err(|e| BufferError::alloc(op, at, e))?;
        let mut buffer = Self {
            storage,
            size: 0,
            growth_factor,
        };
        buffer.set_len(0);
        Ok(buffer)
    }

    /// Returns the storage to `alloc`. The buffer is consumed.
    pub fn release<A: Allocator + ?Sized>(self, alloc: &A) {
        alloc.release(self.storage);
    }

    /// Grows capacity to at least `new_capacity`, preserving content.
    ///
    /// Does nothing if `new_capacity <= capacity()`; capacity never shrinks.
    /// On failure the buffer is unchanged.
    #[track_caller]
    pub fn reserve<A: Allocator + ?Sized>(&mut self, new_capacity: usize, alloc: &A) -> Result<(), BufferError> {
        self.grow_to(new_capacity, "reserve", Location::caller(), alloc)
    }

    /// Number of content bytes.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Bytes available for content without reallocating.
    pub fn capacity(&self) -> usize {
        self.storage.len() - 1
    }

    /// Returns `true` if the buffer holds no content.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Capacity multiplier used when the buffer runs out of room.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Drops all content. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.set_len(0);
    }

    /// Reads the byte at `index`.
    ///
    /// Returns [`BufferError::BoundsViolation`] if `index >= len()`.
    #[track_caller]
    pub fn get(&self, index: usize) -> Result<u8, BufferError> {
        if index >= self.size {
            return Err(BufferError::bounds("get", Location::caller(), index, 1, self.size));
        }
        Ok(self.storage.as_slice()[index])
    }

    /// Overwrites the byte at `index`.
    ///
    /// Returns [`BufferError::BoundsViolation`] if `index >= len()`.
    #[track_caller]
    pub fn set(&mut self, index: usize, byte: u8) -> Result<(), BufferError> {
        if index >= self.size {
            return Err(BufferError::bounds("set", Location::caller(), index, 1, self.size));
        }
        self.storage.as_mut_slice()[index] = byte;
        Ok(())
    }

    /// The content bytes, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage.as_slice()[..self.size]
    }

    /// The content bytes followed by the `0` terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.storage.as_slice()[..=self.size]
    }

    /// Iterates over the content bytes.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u8>> {
        self.as_bytes().iter().copied()
    }

    // ── Internals shared with `ops` ────────────────────────────

    /// The whole storage region, terminator slot included.
    pub(crate) fn raw_mut(&mut self) -> &mut [u8] {
        self.storage.as_mut_slice()
    }

    /// Sets the size and writes the terminator after it.
    pub(crate) fn set_len(&mut self, new_size: usize) {
        debug_assert!(new_size <= self.capacity());
        self.size = new_size;
        self.storage.as_mut_slice()[new_size] = 0;
    }

    /// Ensures room for `additional` appended bytes, growing capacity the way
    /// that many single-byte appends would.
    pub(crate) fn reserve_for_appends<A: Allocator + ?Sized>(
        &mut self,
        additional: usize,
        op: &'static str,
        at: &'static Location<'static>,
        alloc: &A,
    ) -> Result<(), BufferError> {
        self.reserve_for_refill(self.size, additional, op, at, alloc)
    }

    /// Like [`reserve_for_appends`](Self::reserve_for_appends), but as if the
    /// buffer were first truncated to `start_size`.
    pub(crate) fn reserve_for_refill<A: Allocator + ?Sized>(
        &mut self,
        start_size: usize,
        additional: usize,
        op: &'static str,
        at: &'static Location<'static>,
        alloc: &A,
    ) -> Result<(), BufferError> {
        let target = grown_capacity(self.capacity(), start_size, additional, self.growth_factor)
            .ok_or_else(|| BufferError::alloc(op, at, byte_alloc::AllocError::CapacityOverflow))?;
        self.grow_to(target, op, at, alloc)
    }

    fn grow_to<A: Allocator + ?Sized>(
        &mut self,
        new_capacity: usize,
        op: &'static str,
        at: &'static Location<'static>,
        alloc: &A,
    ) -> Result<(), BufferError> {
        let old_capacity = self.capacity();
        if new_capacity <= old_capacity {
            return Ok(());
        }
        let new_byte_count = new_capacity
            .checked_add(1)
            .ok_or_else(|| BufferError::alloc(op, at, byte_alloc::AllocError::CapacityOverflow))?;

        let old_addr = self.storage.addr();
        alloc
            .reallocate(&mut self.storage, old_capacity + 1, new_byte_count)
            .map_err(|e| BufferError::alloc(op, at, e))?;
        tracing::trace!(
            op,
            old_capacity,
            new_capacity,
            relocated = old_addr != self.storage.addr(),
            "buffer storage grown"
        );
        Ok(())
    }
}

/// Capacity after appending `additional` bytes one at a time to a buffer of
/// `size` bytes and `capacity`, where each append first grows capacity to
/// `factor × (size + 1)` whenever `capacity <= size + 1`.
///
/// Returns `None` on arithmetic overflow.
pub(crate) fn grown_capacity(capacity: usize, size: usize, additional: usize, factor: usize) -> Option<usize> {
    let end = size.checked_add(additional)?;
    let mut capacity = capacity;
    let mut next = size;
    while next < end {
        // First append index at which `capacity <= index + 1` holds.
        let trigger = next.max(capacity.saturating_sub(1));
        if trigger >= end {
            break;
        }
        capacity = (trigger + 1).checked_mul(factor)?;
        next = trigger + 1;
    }
    Some(capacity)
}

impl ByteSource for ByteBuffer {
    fn source_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteBuffer {}

impl PartialEq<[u8]> for ByteBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for ByteBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for ByteBuffer {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl<'a> IntoIterator for &'a ByteBuffer {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("content", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
