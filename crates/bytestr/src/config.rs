// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Buffer growth configuration, loaded from TOML or built in code.
//!
//! # TOML Format
//! ```toml
//! default_capacity = 16
//! growth_factor = 2
//! ```

use crate::BufferError;
use std::path::Path;

/// Capacity given to a buffer created from short content.
pub const DEFAULT_CAPACITY: usize = 16;

/// Multiplier applied to `size + 1` when a buffer runs out of room.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Parameters of the capacity-growth policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BufferConfig {
    /// Minimum capacity of a buffer created from content.
    #[serde(default = "default_capacity")]
    pub default_capacity: usize,
    /// Capacity multiplier used on growth. Must be at least 2.
    #[serde(default = "default_growth_factor")]
    pub growth_factor: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_growth_factor() -> usize {
    DEFAULT_GROWTH_FACTOR
}

impl BufferConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, BufferError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BufferError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, BufferError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| BufferError::Config(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, BufferError> {
        toml::to_string_pretty(self)
            .map_err(|e| BufferError::Config(format!("TOML serialise error: {e}")))
    }

    /// Checks that the growth policy can make progress.
    pub fn validate(&self) -> Result<(), BufferError> {
        if self.default_capacity == 0 {
            return Err(BufferError::Config(
                "default_capacity must be at least 1".to_string(),
            ));
        }
        if self.growth_factor < 2 {
            return Err(BufferError::Config(format!(
                "growth_factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}
