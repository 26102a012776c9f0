// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Owned storage regions handed out by allocators.
//!
//! A [`Storage`] is a contiguous, zero-initialised region of exactly
//! [`len`](Storage::len) bytes. Allocators create, grow and reclaim it;
//! everything else only reads and writes through slices.

use crate::AllocError;

/// A contiguous region of raw bytes owned by whoever holds it.
///
/// Consuming a `Storage` in [`Allocator::release`](crate::Allocator::release)
/// is what makes releasing the same region twice impossible.
pub struct Storage {
    bytes: Vec<u8>,
}

impl Storage {
    /// Creates a zero-filled region of exactly `byte_count` bytes.
    ///
    /// Returns [`AllocError::HeapExhausted`] if the system heap cannot
    /// satisfy the request.
    pub fn try_zeroed(byte_count: usize) -> Result<Self, AllocError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(byte_count)
            .map_err(|_| AllocError::HeapExhausted(byte_count))?;
        bytes.resize(byte_count, 0);
        Ok(Self { bytes })
    }

    /// Wraps an existing vector. The region length is `vec.len()`.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Unwraps the region into its backing vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Resizes the region to `new_byte_count`, preserving the first
    /// `min(len, new_byte_count)` bytes and zero-filling any new tail.
    ///
    /// The region may move. On error the region is left untouched.
    pub fn try_resize(&mut self, new_byte_count: usize) -> Result<(), AllocError> {
        if new_byte_count > self.bytes.len() {
            let additional = new_byte_count - self.bytes.len();
            self.bytes
                .try_reserve_exact(additional)
                .map_err(|_| AllocError::HeapExhausted(new_byte_count))?;
            self.bytes.resize(new_byte_count, 0);
        } else {
            self.bytes.truncate(new_byte_count);
            self.bytes.shrink_to_fit();
        }
        Ok(())
    }

    /// Number of bytes in the region.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-length region.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the whole region.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the whole region mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Start address of the region, for identity comparisons only.
    ///
    /// Two calls returning different values mean the region relocated.
    pub fn addr(&self) -> usize {
        self.bytes.as_ptr() as usize
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.bytes.len())
            .finish()
    }
}
