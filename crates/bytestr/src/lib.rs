// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # bytestr
//!
//! Growable, null-terminated byte buffers with explicit allocation, plus
//! zero-copy views over byte ranges.
//!
//! This crate provides:
//! - [`ByteBuffer`]: owned content with tracked size and capacity. The byte
//!   after the content is always `0`.
//! - [`ByteView`]: a read-only window into a literal, slice, buffer or
//!   another view.
//! - [`ops`]: bounds-checked mutation primitives: push/pop, append, insert,
//!   erase, replace, resize, copy_slice, concat.
//! - [`BufferConfig`]: the capacity-growth policy, loadable from TOML.
//!
//! # Design Goals
//! - Every operation that may allocate takes the [`Allocator`] explicitly.
//! - A failed operation leaves its buffer exactly as it was.
//! - Views borrow their referent, so growing or releasing a buffer while a
//!   view over it exists does not compile.
//!
//! # Example
//! ```
//! use byte_alloc::{ArenaAllocator, MemoryBudget};
//! use bytestr::{ops, ByteBuffer, ByteView};
//!
//! let arena = ArenaAllocator::new(MemoryBudget::from_kb(4));
//! let mut b = ByteBuffer::new("hello world", &arena)?;
//! ops::insert(&mut b, 0, 1, b't', &arena)?;
//! ops::erase(&mut b, 0, 1)?;
//! ops::replace(&mut b, 0, 5, "hell", &arena)?;
//! assert_eq!(b.as_bytes(), b"hell world");
//!
//! let word = ByteView::new(&b, 5, 5)?;
//! assert_eq!(word.as_bytes(), b"world");
//!
//! b.release(&arena);
//! assert_eq!(arena.live_bytes(), 0);
//! # Ok::<(), bytestr::BufferError>(())
//! ```
//!
//! [`Allocator`]: byte_alloc::Allocator

mod buffer;
mod config;
mod error;
pub mod ops;
mod source;
mod view;

pub use buffer::ByteBuffer;
pub use config::{BufferConfig, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR};
pub use error::BufferError;
pub use source::ByteSource;
pub use view::ByteView;
