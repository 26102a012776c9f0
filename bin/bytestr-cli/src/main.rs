// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # bytestr
//!
//! Command-line walkthroughs for the bytestr buffer library.
//!
//! ## Usage
//! ```bash
//! # Walk through the buffer mutation primitives
//! bytestr demo
//!
//! # Walk through views and view concatenation
//! bytestr views --budget 4K
//!
//! # Print the effective configuration
//! bytestr --config ./bytestr.toml config
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bytestr",
    about = "Growable null-terminated byte buffers over explicit allocators",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Arena memory budget (e.g., "64K", "1M"). Overrides the config file.
    #[arg(short, long, global = true)]
    budget: Option<String>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, edit and resize buffers, printing each step.
    Demo,

    /// Build views over literals, buffers and other views, then join them.
    Views,

    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let config = commands::CliConfig::load(cli.config.as_deref(), cli.budget.as_deref())?;

    match cli.command {
        Commands::Demo => commands::demo::execute(&config),
        Commands::Views => commands::views::execute(&config),
        Commands::Config => commands::config::execute(&config),
    }
}
