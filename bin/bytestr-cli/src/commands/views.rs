// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `bytestr views` command: zero-copy views and view concatenation.

use super::{show, show_arena, CliConfig};
use bytestr::{ByteBuffer, ByteView};

pub fn execute(config: &CliConfig) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║               bytestr · View Walkthrough            ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let arena = config.arena()?;

    // ── Views ──────────────────────────────────────────────────
    println!("  Views");
    let literal = ByteView::new("Hello world", 0, 5)?;
    print_view("literal[0..5]", &literal);

    let buffer = ByteBuffer::with_config("big brown fox", &config.buffer, &arena)?;
    let over_buffer = ByteView::new(&buffer, 4, 5)?;
    print_view("buffer[4..9]", &over_buffer);

    let over_view = over_buffer.subview(1, 3)?;
    print_view("view[1..4]", &over_view);
    println!();

    // ── Concatenation ──────────────────────────────────────────
    println!("  Concatenation");
    let bang = ByteView::new("!!!", 0, 3)?;
    let joined = literal.concat(&bang, &arena)?;
    show("literal + \"!!!\"", &joined);
    let mixed = over_view.concat(&literal, &arena)?;
    show("view + literal", &mixed);
    println!();

    // ── Rejected operations ────────────────────────────────────
    println!("  Rejected operations");
    if let Err(e) = ByteView::new(&buffer, 10, 5) {
        println!("   {e}");
    }
    if let Err(e) = over_view.get(3) {
        println!("   {e}");
    }
    println!();

    joined.release(&arena);
    mixed.release(&arena);
    buffer.release(&arena);
    show_arena(&arena);

    Ok(())
}

fn print_view(label: &str, view: &ByteView<'_>) {
    println!(
        "   {label:<28} start {:>3}  len {:>3}  \"{}\"",
        view.start(),
        view.len(),
        String::from_utf8_lossy(view.as_bytes()),
    );
}
