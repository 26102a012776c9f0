// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for buffer and view operations.
//!
//! Every contract violation names the operation that detected it and the
//! call site that invoked that operation. A failed operation never leaves
//! the buffer partially mutated.

use byte_alloc::AllocError;
use std::panic::Location;

/// Errors that can occur while creating, mutating or viewing a buffer.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    /// The allocator could not provide or grow storage.
    #[error("allocation failure in {op} at {at}: {source}")]
    AllocationFailure {
        op: &'static str,
        at: &'static Location<'static>,
        #[source]
        source: AllocError,
    },

    /// An index or range reaches past the buffer's size.
    #[error("bounds violation in {op} at {at}: index {index} with count {count} exceeds size {size}")]
    BoundsViolation {
        op: &'static str,
        at: &'static Location<'static>,
        index: usize,
        count: usize,
        size: usize,
    },

    /// A start or start+count reaches past the length of a source range.
    #[error("substring bounds violation in {op} at {at}: start {start} with count {count} exceeds source length {source_len}")]
    SubstringBoundsViolation {
        op: &'static str,
        at: &'static Location<'static>,
        start: usize,
        count: usize,
        source_len: usize,
    },

    /// The operation was asked to act on a zero-length target range.
    #[error("zero-length target range in {op} at {at}")]
    ZeroLengthOperation {
        op: &'static str,
        at: &'static Location<'static>,
    },

    /// A byte was removed from an empty buffer.
    #[error("{op} on an empty buffer at {at}")]
    EmptyBuffer {
        op: &'static str,
        at: &'static Location<'static>,
    },

    /// Buffer configuration is invalid or could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl BufferError {
    /// Name of the operation that failed, if the error came from one.
    pub fn op(&self) -> Option<&'static str> {
        match self {
            Self::AllocationFailure { op, .. }
            | Self::BoundsViolation { op, .. }
            | Self::SubstringBoundsViolation { op, .. }
            | Self::ZeroLengthOperation { op, .. }
            | Self::EmptyBuffer { op, .. } => Some(*op),
            Self::Config(_) => None,
        }
    }

    /// Call site of the failing operation, if the error came from one.
    pub fn location(&self) -> Option<&'static Location<'static>> {
        match self {
            Self::AllocationFailure { at, .. }
            | Self::BoundsViolation { at, .. }
            | Self::SubstringBoundsViolation { at, .. }
            | Self::ZeroLengthOperation { at, .. }
            | Self::EmptyBuffer { at, .. } => Some(*at),
            Self::Config(_) => None,
        }
    }

    pub(crate) fn alloc(op: &'static str, at: &'static Location<'static>, source: AllocError) -> Self {
        Self::AllocationFailure { op, at, source }
    }

    pub(crate) fn bounds(
        op: &'static str,
        at: &'static Location<'static>,
        index: usize,
        count: usize,
        size: usize,
    ) -> Self {
        Self::BoundsViolation {
            op,
            at,
            index,
            count,
            size,
        }
    }

    pub(crate) fn substring(
        op: &'static str,
        at: &'static Location<'static>,
        start: usize,
        count: usize,
        source_len: usize,
    ) -> Self {
        Self::SubstringBoundsViolation {
            op,
            at,
            start,
            count,
            source_len,
        }
    }
}
