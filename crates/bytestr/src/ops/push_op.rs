// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Appending to and removing from the end of a buffer.

use crate::{BufferError, ByteBuffer, ByteSource};
use byte_alloc::Allocator;
use std::panic::Location;

/// Appends one byte. Amortised O(1).
///
/// If `capacity <= len + 1`, capacity first grows to
/// `growth_factor × (len + 1)`.
///
/// # Errors
/// Returns [`BufferError::AllocationFailure`] if growth fails; the buffer is
/// unchanged.
#[track_caller]
pub fn push_back<A: Allocator + ?Sized>(buffer: &mut ByteBuffer, byte: u8, alloc: &A) -> Result<(), BufferError> {
    let at = Location::caller();
    buffer.reserve_for_appends(1, "push_back", at, alloc)?;
    let size = buffer.len();
    buffer.raw_mut()[size] = byte;
    buffer.set_len(size + 1);
    Ok(())
}

/// Removes and returns the last byte.
///
/// # Errors
/// Returns [`BufferError::EmptyBuffer`] if the buffer holds no content.
#[track_caller]
pub fn pop_back(buffer: &mut ByteBuffer) -> Result<u8, BufferError> {
    let size = buffer.len();
    if size == 0 {
        return Err(BufferError::EmptyBuffer {
            op: "pop_back",
            at: Location::caller(),
        });
    }
    let byte = buffer.raw_mut()[size - 1];
    buffer.set_len(size - 1);
    Ok(byte)
}

/// Appends `count` copies of `byte`.
#[track_caller]
pub fn append_repeated<A: Allocator + ?Sized>(
    buffer: &mut ByteBuffer,
    count: usize,
    byte: u8,
    alloc: &A,
) -> Result<(), BufferError> {
    let at = Location::caller();
    buffer.reserve_for_appends(count, "append_repeated", at, alloc)?;
    let size = buffer.len();
    buffer.raw_mut()[size..size + count].fill(byte);
    buffer.set_len(size + count);
    Ok(())
}

/// Appends every byte of `bytes`, in order.
#[track_caller]
pub fn append<S, A>(buffer: &mut ByteBuffer, bytes: &S, alloc: &A) -> Result<(), BufferError>
where
    S: ByteSource + ?Sized,
    A: Allocator + ?Sized,
{
    let at = Location::caller();
    let bytes = bytes.source_bytes();
    buffer.reserve_for_appends(bytes.len(), "append", at, alloc)?;
    let size = buffer.len();
    buffer.raw_mut()[size..size + bytes.len()].copy_from_slice(bytes);
    buffer.set_len(size + bytes.len());
    Ok(())
}

/// Removes `count` bytes from the end.
///
/// # Errors
/// Returns [`BufferError::BoundsViolation`] if `count > len()`; nothing is
/// removed.
#[track_caller]
pub fn remove_from_end(buffer: &mut ByteBuffer, count: usize) -> Result<(), BufferError> {
    let size = buffer.len();
    if count > size {
        return Err(BufferError::bounds("remove_from_end", Location::caller(), 0, count, size));
    }
    buffer.set_len(size - count);
    Ok(())
}
