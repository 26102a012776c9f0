// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommands and the setup they share: logging and configuration.
//!
//! # TOML Format
//! ```toml
//! arena_budget = "64K"
//!
//! [buffer]
//! default_capacity = 16
//! growth_factor = 2
//! ```

pub mod config;
pub mod demo;
pub mod views;

use anyhow::Context;
use byte_alloc::{ArenaAllocator, MemoryBudget};
use bytestr::{BufferConfig, ByteBuffer};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn default_arena_budget() -> String {
    "64K".to_string()
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CliConfig {
    /// Budget for the arena every walkthrough allocates from.
    #[serde(default = "default_arena_budget")]
    pub arena_budget: String,

    /// Growth policy for buffers created by the walkthroughs.
    #[serde(default)]
    pub buffer: BufferConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            arena_budget: default_arena_budget(),
            buffer: BufferConfig::default(),
        }
    }
}

impl CliConfig {
    /// Loads `path` if given, applies a `--budget` override, and validates.
    pub fn load(path: Option<&Path>, budget_override: Option<&str>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read config '{}'", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("invalid config '{}'", path.display()))?
            }
            None => Self::default(),
        };
        if let Some(budget) = budget_override {
            config.arena_budget = budget.to_string();
        }
        config.buffer.validate()?;
        config.budget()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// The parsed arena budget.
    pub fn budget(&self) -> anyhow::Result<MemoryBudget> {
        Ok(MemoryBudget::parse(&self.arena_budget)?)
    }

    /// A fresh arena sized by [`budget`](Self::budget).
    pub fn arena(&self) -> anyhow::Result<ArenaAllocator> {
        Ok(ArenaAllocator::new(self.budget()?))
    }
}

/// Prints one walkthrough step: size, capacity and content of `buffer`.
pub fn show(step: &str, buffer: &ByteBuffer) {
    println!(
        "   {step:<28} size {:>3}  capacity {:>3}  \"{}\"",
        buffer.len(),
        buffer.capacity(),
        String::from_utf8_lossy(buffer.as_bytes()),
    );
}

/// Prints the arena's live bytes and counters.
pub fn show_arena(arena: &ArenaAllocator) {
    println!("  Arena");
    println!("   Budget:     {}", arena.budget());
    println!("   Live:       {} bytes", arena.live_bytes());
    println!("   Free list:  {} bytes", arena.free_list_bytes());
    println!("   Stats:      {}", arena.stats().summary());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::load(None, None).unwrap();
        assert_eq!(config.arena_budget, "64K");
        assert_eq!(config.budget().unwrap(), MemoryBudget::from_kb(64));
        assert_eq!(config.buffer, BufferConfig::default());
    }

    #[test]
    fn test_budget_override() {
        let config = CliConfig::load(None, Some("2M")).unwrap();
        assert_eq!(config.budget().unwrap(), MemoryBudget::from_mb(2));
    }

    #[test]
    fn test_bad_budget_rejected() {
        assert!(CliConfig::load(None, Some("lots")).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("bytestr-cli-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "arena_budget = \"8K\"\n\n[buffer]\ngrowth_factor = 3").unwrap();
        drop(file);

        let config = CliConfig::load(Some(&path), None).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.budget().unwrap(), MemoryBudget::from_kb(8));
        assert_eq!(config.buffer.growth_factor, 3);
        assert_eq!(config.buffer.default_capacity, bytestr::DEFAULT_CAPACITY);
    }

    #[test]
    fn test_invalid_growth_factor_rejected() {
        let path = std::env::temp_dir().join(format!("bytestr-cli-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[buffer]\ngrowth_factor = 1\n").unwrap();
        let result = CliConfig::load(Some(&path), None);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
