// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for storage allocation.

/// Errors an [`Allocator`](crate::Allocator) can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// The request would exceed the allocator's memory budget.
    #[error("out of memory: requested {requested_bytes} bytes, but only {available_bytes} available (budget: {budget_bytes})")]
    OutOfMemory {
        requested_bytes: usize,
        available_bytes: usize,
        budget_bytes: usize,
    },

    /// The system heap refused the request.
    #[error("heap exhausted: could not provide {0} bytes")]
    HeapExhausted(usize),

    /// A storage region of zero bytes was requested.
    #[error("cannot allocate zero-sized storage")]
    ZeroSizedAllocation,

    /// The requested byte count cannot be represented.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// A budget string could not be parsed.
    #[error("invalid budget '{input}': {reason}")]
    InvalidBudget { input: String, reason: String },
}
