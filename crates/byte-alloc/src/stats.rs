// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Allocation statistics for the arena allocator.

/// Cumulative counters describing how an arena has been used.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct AllocationStats {
    /// Successful `allocate` calls.
    pub allocations: u64,
    /// Successful `reallocate` calls.
    pub reallocations: u64,
    /// `release` calls.
    pub releases: u64,
    /// Allocations served from the free list.
    pub free_list_hits: u64,
    /// Allocations that needed fresh memory.
    pub free_list_misses: u64,
    /// Requests rejected for exceeding the budget.
    pub oom_count: u64,
    /// High-water mark of live bytes.
    pub peak_live_bytes: usize,
}

impl AllocationStats {
    /// Fraction of allocations served from the free list, in `[0.0, 1.0]`.
    pub fn free_list_hit_ratio(&self) -> f64 {
        let total = self.free_list_hits + self.free_list_misses;
        if total == 0 {
            return 0.0;
        }
        self.free_list_hits as f64 / total as f64
    }

    pub(crate) fn record_allocation(&mut self, reused: bool) {
        self.allocations += 1;
        if reused {
            self.free_list_hits += 1;
        } else {
            self.free_list_misses += 1;
        }
    }

    pub(crate) fn record_reallocation(&mut self) {
        self.reallocations += 1;
    }

    pub(crate) fn record_release(&mut self) {
        self.releases += 1;
    }

    pub(crate) fn record_oom(&mut self) {
        self.oom_count += 1;
    }

    pub(crate) fn update_peak(&mut self, live_bytes: usize) {
        self.peak_live_bytes = self.peak_live_bytes.max(live_bytes);
    }

    /// Returns a one-line human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{} allocations ({} reused, {:.0}% hit rate), {} reallocations, \
             {} releases, {} OOMs, peak {} bytes",
            self.allocations,
            self.free_list_hits,
            self.free_list_hit_ratio() * 100.0,
            self.reallocations,
            self.releases,
            self.oom_count,
            self.peak_live_bytes,
        )
    }
}
