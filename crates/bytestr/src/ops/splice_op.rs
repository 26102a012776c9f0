// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Interior edits: insert, erase and replace.

use crate::{BufferError, ByteBuffer, ByteSource};
use byte_alloc::Allocator;
use std::panic::Location;

/// Inserts `count` copies of `byte` at `index`, shifting the tail right.
///
/// # Errors
/// - [`BufferError::BoundsViolation`] if `index > len()`.
/// - [`BufferError::AllocationFailure`] if growth fails.
///
/// The buffer is unchanged on error.
#[track_caller]
pub fn insert<A: Allocator + ?Sized>(
    buffer: &mut ByteBuffer,
    index: usize,
    count: usize,
    byte: u8,
    alloc: &A,
) -> Result<(), BufferError> {
    let at = Location::caller();
    if index > buffer.len() {
        return Err(BufferError::bounds("insert", at, index, count, buffer.len()));
    }
    open_gap(buffer, index, count, "insert", at, alloc)?;
    buffer.raw_mut()[index..index + count].fill(byte);
    Ok(())
}

/// Removes the `count` bytes starting at `index`, shifting the tail left.
///
/// # Errors
/// Returns [`BufferError::BoundsViolation`] if `index + count > len()`;
/// nothing is removed.
#[track_caller]
pub fn erase(buffer: &mut ByteBuffer, index: usize, count: usize) -> Result<(), BufferError> {
    let at = Location::caller();
    let in_bounds = index
        .checked_add(count)
        .is_some_and(|end| end <= buffer.len());
    if !in_bounds {
        return Err(BufferError::bounds("erase", at, index, count, buffer.len()));
    }
    close_gap(buffer, index, count);
    Ok(())
}

/// Replaces the `count` bytes starting at `index` with `replacement`.
///
/// The target range is first widened (by opening a gap at `index`) or
/// narrowed (by erasing at `index`) to the replacement's length, then
/// overwritten.
///
/// # Errors
/// - [`BufferError::BoundsViolation`] if `index > len()` or
///   `index + count > len()`.
/// - [`BufferError::ZeroLengthOperation`] if `count == 0`.
/// - [`BufferError::AllocationFailure`] if growth fails.
///
/// The buffer is unchanged on error.
///
/// # Examples
/// ```
/// use byte_alloc::HeapAllocator;
/// use bytestr::{ops, ByteBuffer};
///
/// let heap = HeapAllocator::new();
/// let mut b = ByteBuffer::new("hello", &heap).unwrap();
/// ops::replace(&mut b, 0, 5, "hell", &heap).unwrap();
/// assert_eq!(b.as_bytes(), b"hell");
/// ```
#[track_caller]
pub fn replace<S, A>(
    buffer: &mut ByteBuffer,
    index: usize,
    count: usize,
    replacement: &S,
    alloc: &A,
) -> Result<(), BufferError>
where
    S: ByteSource + ?Sized,
    A: Allocator + ?Sized,
{
    let at = Location::caller();
    let size = buffer.len();
    if index > size {
        return Err(BufferError::bounds("replace", at, index, count, size));
    }
    if count == 0 {
        return Err(BufferError::ZeroLengthOperation { op: "replace", at });
    }
    if index.checked_add(count).map_or(true, |end| end > size) {
        return Err(BufferError::bounds("replace", at, index, count, size));
    }

    let replacement = replacement.source_bytes();
    let len = replacement.len();
    if len > count {
        open_gap(buffer, index, len - count, "replace", at, alloc)?;
    } else if len < count {
        close_gap(buffer, index, count - len);
    }
    buffer.raw_mut()[index..index + len].copy_from_slice(replacement);
    Ok(())
}

/// Grows the buffer by `gap` bytes and moves `[index, len)` right by `gap`.
/// The bytes in `[index, index + gap)` are left for the caller to overwrite.
fn open_gap<A: Allocator + ?Sized>(
    buffer: &mut ByteBuffer,
    index: usize,
    gap: usize,
    op: &'static str,
    at: &'static Location<'static>,
    alloc: &A,
) -> Result<(), BufferError> {
    buffer.reserve_for_appends(gap, op, at, alloc)?;
    let size = buffer.len();
    buffer.raw_mut().copy_within(index..size, index + gap);
    buffer.set_len(size + gap);
    Ok(())
}

/// Moves `[index + gap, len)` left by `gap` and shortens the buffer.
fn close_gap(buffer: &mut ByteBuffer, index: usize, gap: usize) {
    let size = buffer.len();
    buffer.raw_mut().copy_within(index + gap..size, index);
    buffer.set_len(size - gap);
}
