// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Bounds-checked mutation primitives on [`ByteBuffer`](crate::ByteBuffer).
//!
//! Every primitive validates its arguments and reserves any capacity it
//! needs before touching content, so an error leaves the buffer exactly as
//! it was. Growth follows the single-byte append policy: whenever
//! `capacity <= size + 1`, capacity becomes `growth_factor × (size + 1)`.

mod copy_op;
mod fill_op;
mod push_op;
mod splice_op;

pub use copy_op::{concat, copy_slice};
pub(crate) use copy_op::concat_at;
pub use fill_op::{assign, resize};
pub use push_op::{append, append_repeated, pop_back, push_back, remove_from_end};
pub use splice_op::{erase, insert, replace};
