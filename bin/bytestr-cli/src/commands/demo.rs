// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `bytestr demo` command: walk through the buffer mutation primitives.
//!
//! Every buffer is allocated from one arena and released at the end, so the
//! closing arena report should show zero live bytes.

use super::{show, show_arena, CliConfig};
use bytestr::{ops, ByteBuffer};

pub fn execute(config: &CliConfig) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              bytestr · Buffer Walkthrough           ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let arena = config.arena()?;

    // ── Creation ───────────────────────────────────────────────
    println!("  Creation");
    let mut first = ByteBuffer::with_config("hello world", &config.buffer, &arena)?;
    show("new(\"hello world\")", &first);

    let mut second = ByteBuffer::with_capacity("Hello world".len(), &arena)?;
    show("with_capacity(11)", &second);
    ops::copy_slice(&mut second, 0, 0, "H", &arena)?;
    show("copy_slice(0, 0, \"H\")", &second);
    ops::append(&mut second, "ello world", &arena)?;
    show("append(\"ello world\")", &second);
    println!();

    // ── Edits ──────────────────────────────────────────────────
    println!("  Edits");
    ops::push_back(&mut first, b'1', &arena)?;
    show("push_back('1')", &first);
    let popped = ops::pop_back(&mut first)?;
    show(&format!("pop_back() -> '{}'", popped as char), &first);
    ops::insert(&mut first, 0, 1, b't', &arena)?;
    show("insert(0, 1, 't')", &first);
    ops::erase(&mut first, 0, 1)?;
    show("erase(0, 1)", &first);
    ops::replace(&mut first, 0, 5, "hell", &arena)?;
    show("replace(0, 5, \"hell\")", &first);
    println!();

    // ── Whole-buffer ───────────────────────────────────────────
    println!("  Whole-buffer");
    first.clear();
    show("clear()", &first);
    println!("   is_empty: {}", first.is_empty());
    ops::resize(&mut second, 12, b'h', &arena)?;
    show("resize(12, 'h')", &second);
    println!();

    // ── Rejected operations ────────────────────────────────────
    println!("  Rejected operations");
    if let Err(e) = ops::pop_back(&mut first) {
        println!("   {e}");
    }
    if let Err(e) = ops::erase(&mut second, 10, 5) {
        println!("   {e}");
    }
    if let Err(e) = ops::replace(&mut second, 0, 0, "x", &arena) {
        println!("   {e}");
    }
    println!();

    first.release(&arena);
    second.release(&arena);
    show_arena(&arena);

    Ok(())
}
