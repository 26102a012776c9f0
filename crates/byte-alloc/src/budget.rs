// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Arena budget configuration and parsing.
//!
//! A [`MemoryBudget`] is the hard ceiling an [`ArenaAllocator`](crate::ArenaAllocator)
//! enforces. It parses human-readable strings so it can live in config files
//! and on the command line.

use crate::AllocError;
use std::fmt;

const KB: usize = 1024;
const MB: usize = 1024 * KB;
const GB: usize = 1024 * MB;

/// A hard memory ceiling in bytes.
///
/// # Parsing
/// - `"64K"` or `"64KB"` → 64 × 1024 bytes
/// - `"1M"` or `"1MB"` → 1024² bytes
/// - `"1G"` or `"1GB"` → 1024³ bytes
/// - `"4096"` or `"4096B"` → raw byte count
///
/// # Examples
/// ```
/// use byte_alloc::MemoryBudget;
///
/// let b = MemoryBudget::parse("64K").unwrap();
/// assert_eq!(b.as_bytes(), 64 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MemoryBudget {
    bytes: usize,
}

impl MemoryBudget {
    /// Creates a budget from a byte count.
    pub fn from_bytes(bytes: usize) -> Self {
        Self { bytes }
    }

    /// Creates a budget from kilobytes.
    pub fn from_kb(kb: usize) -> Self {
        Self { bytes: kb * KB }
    }

    /// Creates a budget from megabytes.
    pub fn from_mb(mb: usize) -> Self {
        Self { bytes: mb * MB }
    }

    /// An effectively unlimited budget.
    pub fn unlimited() -> Self {
        Self { bytes: usize::MAX }
    }

    /// Returns the budget in bytes.
    pub fn as_bytes(&self) -> usize {
        self.bytes
    }

    /// Parses a human-readable budget string. Case-insensitive.
    pub fn parse(s: &str) -> Result<Self, AllocError> {
        let trimmed = s.trim();
        let invalid = |reason: &str| AllocError::InvalidBudget {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        if trimmed.is_empty() {
            return Err(invalid("empty budget string"));
        }

        let upper = trimmed.to_ascii_uppercase();
        // Longer suffixes first so "MB" is not read as "M" + "B".
        let suffixes: [(&str, usize); 7] = [
            ("GB", GB),
            ("G", GB),
            ("MB", MB),
            ("M", MB),
            ("KB", KB),
            ("K", KB),
            ("B", 1),
        ];
        let (num_str, multiplier) = suffixes
            .iter()
            .find_map(|&(suffix, mult)| upper.strip_suffix(suffix).map(|n| (n, mult)))
            .unwrap_or((upper.as_str(), 1));

        let value: usize = num_str
            .trim()
            .parse()
            .map_err(|_| invalid("expected a number followed by an optional K, M or G suffix"))?;

        let bytes = value
            .checked_mul(multiplier)
            .ok_or_else(|| invalid("budget overflows the address space"))?;

        if bytes == 0 {
            return Err(invalid("budget must be non-zero"));
        }

        Ok(Self { bytes })
    }
}

impl Default for MemoryBudget {
    fn default() -> Self {
        Self::from_mb(1)
    }
}

impl fmt::Display for MemoryBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bytes == usize::MAX {
            write!(f, "unlimited")
        } else if self.bytes >= GB && self.bytes % GB == 0 {
            write!(f, "{} GB", self.bytes / GB)
        } else if self.bytes >= MB && self.bytes % MB == 0 {
            write!(f, "{} MB", self.bytes / MB)
        } else if self.bytes >= KB && self.bytes % KB == 0 {
            write!(f, "{} KB", self.bytes / KB)
        } else {
            write!(f, "{} B", self.bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(MemoryBudget::from_kb(4).as_bytes(), 4096);
        assert_eq!(MemoryBudget::from_mb(2).as_bytes(), 2 * 1024 * 1024);
    }

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(MemoryBudget::parse("64K").unwrap().as_bytes(), 64 * 1024);
        assert_eq!(MemoryBudget::parse("64kb").unwrap().as_bytes(), 64 * 1024);
        assert_eq!(MemoryBudget::parse("1M").unwrap().as_bytes(), 1024 * 1024);
        assert_eq!(MemoryBudget::parse("1g").unwrap().as_bytes(), 1024 * 1024 * 1024);
        assert_eq!(MemoryBudget::parse("512B").unwrap().as_bytes(), 512);
    }

    #[test]
    fn test_parse_raw_bytes() {
        assert_eq!(MemoryBudget::parse("4096").unwrap().as_bytes(), 4096);
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(MemoryBudget::parse("  2K ").unwrap().as_bytes(), 2048);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(MemoryBudget::parse("").is_err());
        assert!(MemoryBudget::parse("lots").is_err());
        assert!(MemoryBudget::parse("0K").is_err());
        assert!(matches!(
            MemoryBudget::parse("abc"),
            Err(AllocError::InvalidBudget { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(MemoryBudget::from_mb(3).to_string(), "3 MB");
        assert_eq!(MemoryBudget::from_kb(2).to_string(), "2 KB");
        assert_eq!(MemoryBudget::from_bytes(100).to_string(), "100 B");
        assert_eq!(MemoryBudget::unlimited().to_string(), "unlimited");
    }

    #[test]
    fn test_serde_roundtrip() {
        let b = MemoryBudget::from_kb(256);
        let json = serde_json::to_string(&b).unwrap();
        let back: MemoryBudget = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
