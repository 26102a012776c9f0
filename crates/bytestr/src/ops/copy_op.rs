// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Copying ranges between byte sources and buffers.

use crate::{BufferConfig, BufferError, ByteBuffer, ByteSource};
use byte_alloc::{AllocError, Allocator};
use std::panic::Location;

/// Makes `destination` hold exactly `source[source_start..source_start + source_count]`.
///
/// A `source_count` of `0` means "from `source_start` to the end of
/// `source`". The destination is first shaped to the requested length
/// (padded with spaces when shorter, truncated from the end when longer),
/// then the range is copied in starting at index 0.
///
/// # Errors
/// - [`BufferError::SubstringBoundsViolation`] if `source_start` or
///   `source_start + source_count` lies past the end of `source`.
/// - [`BufferError::AllocationFailure`] if padding needs growth that fails.
///
/// The destination is unchanged on error.
///
/// # Examples
/// ```
/// use byte_alloc::HeapAllocator;
/// use bytestr::{ops, ByteBuffer};
///
/// let heap = HeapAllocator::new();
/// let mut b = ByteBuffer::with_capacity(11, &heap).unwrap();
/// ops::copy_slice(&mut b, 6, 0, "Hello world", &heap).unwrap();
/// assert_eq!(b.as_bytes(), b"world");
/// ```
#[track_caller]
pub fn copy_slice<S, A>(
    destination: &mut ByteBuffer,
    source_start: usize,
    source_count: usize,
    source: &S,
    alloc: &A,
) -> Result<(), BufferError>
where
    S: ByteSource + ?Sized,
    A: Allocator + ?Sized,
{
    let at = Location::caller();
    let source = source.source_bytes();
    let source_len = source.len();
    if source_start > source_len {
        return Err(BufferError::substring("copy_slice", at, source_start, source_count, source_len));
    }
    let count = if source_count == 0 {
        source_len - source_start
    } else {
        source_count
    };
    if source_start.checked_add(count).map_or(true, |end| end > source_len) {
        return Err(BufferError::substring("copy_slice", at, source_start, count, source_len));
    }

    let size = destination.len();
    if size < count {
        destination.reserve_for_appends(count - size, "copy_slice", at, alloc)?;
    }
    destination.raw_mut()[..count].copy_from_slice(&source[source_start..source_start + count]);
    destination.set_len(count);
    Ok(())
}

/// Allocates a new buffer holding `first`'s bytes followed by `second`'s.
///
/// The new buffer's capacity is exactly the combined length. Neither input
/// is modified.
#[track_caller]
pub fn concat<S1, S2, A>(first: &S1, second: &S2, alloc: &A) -> Result<ByteBuffer, BufferError>
where
    S1: ByteSource + ?Sized,
    S2: ByteSource + ?Sized,
    A: Allocator + ?Sized,
{
    concat_at(first, second, "concat", Location::caller(), alloc)
}

pub(crate) fn concat_at<S1, S2, A>(
    first: &S1,
    second: &S2,
    op: &'static str,
    at: &'static Location<'static>,
    alloc: &A,
) -> Result<ByteBuffer, BufferError>
where
    S1: ByteSource + ?Sized,
    S2: ByteSource + ?Sized,
    A: Allocator + ?Sized,
{
    let first = first.source_bytes();
    let second = second.source_bytes();
    let total = first
        .len()
        .checked_add(second.len())
        .ok_or_else(|| BufferError::alloc(op, at, AllocError::CapacityOverflow))?;

    let mut buffer =
        ByteBuffer::allocate_empty(total, BufferConfig::default().growth_factor, op, at, alloc)?;
    let raw = buffer.raw_mut();
    raw[..first.len()].copy_from_slice(first);
    raw[first.len()..total].copy_from_slice(second);
    buffer.set_len(total);
    Ok(buffer)
}
