// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The allocator capability set and the system-heap implementation.
//!
//! Buffers never pick their own memory source. Every call that may acquire,
//! grow or return storage receives an `&impl Allocator` from the caller, and
//! the implementor itself plays the role of the allocation context: it is
//! owned outside the buffer and must outlive every buffer created through it.

use crate::{AllocError, Storage};

/// A memory-management capability set: acquire, grow and return storage.
///
/// # Contract
/// - [`allocate`](Allocator::allocate) returns a region of exactly
///   `byte_count` bytes.
/// - [`reallocate`](Allocator::reallocate) resizes `storage` to
///   `new_byte_count`, preserving the first `min(old, new)` bytes. The region
///   may move. If it fails, `storage` must be left exactly as it was.
/// - [`release`](Allocator::release) takes the region back. It should only
///   be given storage that came from the same allocator.
pub trait Allocator {
    /// Acquires a new storage region of `byte_count` bytes.
    fn allocate(&self, byte_count: usize) -> Result<Storage, AllocError>;

    /// Returns a storage region to the allocator.
    fn release(&self, storage: Storage);

    /// Resizes `storage` from `old_byte_count` to `new_byte_count` bytes.
    fn reallocate(
        &self,
        storage: &mut Storage,
        old_byte_count: usize,
        new_byte_count: usize,
    ) -> Result<(), AllocError>;
}

impl<A: Allocator + ?Sized> Allocator for &A {
    fn allocate(&self, byte_count: usize) -> Result<Storage, AllocError> {
        (**self).allocate(byte_count)
    }

    fn release(&self, storage: Storage) {
        (**self).release(storage)
    }

    fn reallocate(
        &self,
        storage: &mut Storage,
        old_byte_count: usize,
        new_byte_count: usize,
    ) -> Result<(), AllocError> {
        (**self).reallocate(storage, old_byte_count, new_byte_count)
    }
}

/// Allocator backed directly by the process heap.
///
/// Carries no state; any number of buffers may share one instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapAllocator;

impl HeapAllocator {
    /// Creates a heap allocator.
    pub fn new() -> Self {
        Self
    }
}

impl Allocator for HeapAllocator {
    fn allocate(&self, byte_count: usize) -> Result<Storage, AllocError> {
        if byte_count == 0 {
            return Err(AllocError::ZeroSizedAllocation);
        }
        Storage::try_zeroed(byte_count)
    }

    fn release(&self, storage: Storage) {
        drop(storage);
    }

    fn reallocate(
        &self,
        storage: &mut Storage,
        old_byte_count: usize,
        new_byte_count: usize,
    ) -> Result<(), AllocError> {
        debug_assert_eq!(storage.len(), old_byte_count);
        if new_byte_count == 0 {
            return Err(AllocError::ZeroSizedAllocation);
        }
        storage.try_resize(new_byte_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_allocate() {
        let heap = HeapAllocator::new();
        let s = heap.allocate(32).unwrap();
        assert_eq!(s.len(), 32);
        heap.release(s);
    }

    #[test]
    fn test_heap_zero_allocation() {
        let heap = HeapAllocator::new();
        assert!(matches!(
            heap.allocate(0),
            Err(AllocError::ZeroSizedAllocation)
        ));
    }

    #[test]
    fn test_heap_reallocate_preserves_prefix() {
        let heap = HeapAllocator::new();
        let mut s = heap.allocate(4).unwrap();
        s.as_mut_slice().copy_from_slice(b"abcd");

        heap.reallocate(&mut s, 4, 8).unwrap();
        assert_eq!(&s.as_slice()[..4], b"abcd");
        assert_eq!(s.len(), 8);

        heap.reallocate(&mut s, 8, 2).unwrap();
        assert_eq!(s.as_slice(), b"ab");
    }

    #[test]
    fn test_allocator_through_reference() {
        fn grab(alloc: &dyn Allocator) -> Storage {
            alloc.allocate(8).unwrap()
        }
        let heap = HeapAllocator::new();
        let by_ref = &heap;
        assert_eq!(grab(&by_ref).len(), 8);
    }
}
