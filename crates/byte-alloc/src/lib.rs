// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # byte-alloc
//!
//! The memory-management capability set that byte buffers are built on,
//! plus two concrete implementations.
//!
//! # Key Components
//!
//! - [`Allocator`]: acquire, release and resize raw storage. The
//!   implementor is the allocation context; callers pass it explicitly to
//!   every operation that may allocate.
//! - [`Storage`]: an owned, contiguous byte region.
//! - [`HeapAllocator`]: stateless allocator over the process heap.
//! - [`ArenaAllocator`]: enforces a [`MemoryBudget`], recycles released
//!   regions through a size-class free list, and records
//!   [`AllocationStats`].
//!
//! # Ownership Model
//!
//! ```text
//! Allocator::allocate(n)  ──► Storage (n bytes)
//!                                │
//!                                │  reallocate(&mut storage, n, m)
//!                                ▼
//!                             Storage (m bytes, may have moved)
//!                                │
//!                                │  release(storage)   (consumes it)
//!                                ▼
//!                             allocator free list / heap
//! ```
//!
//! # Example
//! ```
//! use byte_alloc::{Allocator, ArenaAllocator, MemoryBudget};
//!
//! let arena = ArenaAllocator::new(MemoryBudget::from_kb(64));
//! let mut storage = arena.allocate(16).unwrap();
//! arena.reallocate(&mut storage, 16, 64).unwrap();
//! assert_eq!(arena.live_bytes(), 64);
//!
//! arena.release(storage);
//! assert_eq!(arena.live_bytes(), 0);
//! ```

mod allocator;
pub mod arena;
mod budget;
mod error;
mod stats;
mod storage;

pub use allocator::{Allocator, HeapAllocator};
pub use arena::ArenaAllocator;
pub use budget::MemoryBudget;
pub use error::AllocError;
pub use stats::AllocationStats;
pub use storage::Storage;
