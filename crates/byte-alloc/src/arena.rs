// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Budget-enforced arena allocator.
//!
//! The [`ArenaAllocator`] is the allocation context most callers hand to
//! their buffers. It:
//!
//! 1. Enforces a hard ceiling on live bytes; requests that would cross it
//!    return `Err(OutOfMemory)` and leave existing storage untouched.
//! 2. Keeps released regions in a free list binned by size class, so a
//!    buffer that is released and re-created does not go back to the heap.
//! 3. Tracks [`AllocationStats`] for diagnostics.
//!
//! # Size Classes
//! A released region is binned under the largest power of two that fits in
//! its backing capacity. A request is served from the bin of the smallest
//! power of two that holds it, so any region found there is large enough.

use crate::{AllocError, AllocationStats, Allocator, MemoryBudget, Storage};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Smallest size class. Smaller regions are not worth caching.
const MIN_SIZE_CLASS: usize = 64;

/// An allocator that enforces a [`MemoryBudget`] and recycles released
/// storage.
///
/// # Example
/// ```
/// use byte_alloc::{Allocator, ArenaAllocator, MemoryBudget};
///
/// let arena = ArenaAllocator::new(MemoryBudget::from_kb(4));
/// let storage = arena.allocate(100).unwrap();
/// assert_eq!(arena.live_bytes(), 100);
///
/// arena.release(storage);
/// assert_eq!(arena.live_bytes(), 0);
/// ```
pub struct ArenaAllocator {
    /// The ceiling on live bytes.
    budget: MemoryBudget,
    /// Bytes currently handed out (allocated, not yet released).
    live_bytes: AtomicUsize,
    /// Released regions: size class → cached vectors.
    free_regions: Mutex<HashMap<usize, Vec<Vec<u8>>>>,
    /// Total backing capacity held in the free list.
    free_list_bytes: AtomicUsize,
    stats: Mutex<AllocationStats>,
}

impl ArenaAllocator {
    /// Creates an arena with the given budget.
    pub fn new(budget: MemoryBudget) -> Self {
        Self {
            budget,
            live_bytes: AtomicUsize::new(0),
            free_regions: Mutex::new(HashMap::new()),
            free_list_bytes: AtomicUsize::new(0),
            stats: Mutex::new(AllocationStats::default()),
        }
    }

    /// Returns the number of bytes currently handed out.
    pub fn live_bytes(&self) -> usize {
        self.live_bytes.load(Ordering::Acquire)
    }

    /// Returns the number of bytes that can still be handed out.
    pub fn available_bytes(&self) -> usize {
        self.budget.as_bytes().saturating_sub(self.live_bytes())
    }

    /// Returns the budget.
    pub fn budget(&self) -> MemoryBudget {
        self.budget
    }

    /// Returns a snapshot of allocation statistics.
    pub fn stats(&self) -> AllocationStats {
        self.stats
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Returns the backing capacity held in the free list.
    pub fn free_list_bytes(&self) -> usize {
        self.free_list_bytes.load(Ordering::Acquire)
    }

    /// Drops every cached region. Live storage is unaffected.
    pub fn shrink(&self) {
        if let Ok(mut free) = self.free_regions.lock() {
            free.clear();
            self.free_list_bytes.store(0, Ordering::Release);
            tracing::debug!("arena free list cleared");
        }
    }

    /// Rejects a request for `requested` more live bytes if it would cross
    /// the budget.
    fn check_budget(&self, requested: usize) -> Result<(), AllocError> {
        let live = self.live_bytes();
        let budget = self.budget.as_bytes();
        let over = live
            .checked_add(requested)
            .map_or(true, |total| total > budget);
        if over {
            if let Ok(mut stats) = self.stats.lock() {
                stats.record_oom();
            }
            tracing::warn!(
                requested,
                live,
                budget,
                "arena request rejected: budget exhausted"
            );
            return Err(AllocError::OutOfMemory {
                requested_bytes: requested,
                available_bytes: budget.saturating_sub(live),
                budget_bytes: budget,
            });
        }
        Ok(())
    }

    fn take_cached(&self, byte_count: usize) -> Option<Vec<u8>> {
        let class = request_class_for(byte_count)?;
        let mut free = self.free_regions.lock().ok()?;
        let mut region = free.get_mut(&class)?.pop()?;
        self.free_list_bytes
            .fetch_sub(region.capacity(), Ordering::Release);
        region.clear();
        region.resize(byte_count, 0);
        Some(region)
    }

    fn add_live(&self, bytes: usize) {
        let now = self.live_bytes.fetch_add(bytes, Ordering::AcqRel) + bytes;
        if let Ok(mut stats) = self.stats.lock() {
            stats.update_peak(now);
        }
    }
}

impl Allocator for ArenaAllocator {
    fn allocate(&self, byte_count: usize) -> Result<Storage, AllocError> {
        if byte_count == 0 {
            return Err(AllocError::ZeroSizedAllocation);
        }
        self.check_budget(byte_count)?;

        let cached = self.take_cached(byte_count);
        let reused = cached.is_some();
        let region = match cached {
            Some(region) => region,
            None => {
                let class = request_class_for(byte_count).unwrap_or(byte_count);
                let mut region = Vec::new();
                region
                    .try_reserve_exact(class)
                    .map_err(|_| AllocError::HeapExhausted(class))?;
                region.resize(byte_count, 0);
                region
            }
        };

        self.add_live(byte_count);
        if let Ok(mut stats) = self.stats.lock() {
            stats.record_allocation(reused);
        }
        tracing::debug!(byte_count, reused, "arena allocate");
        Ok(Storage::from_vec(region))
    }

    fn release(&self, storage: Storage) {
        let len = storage.len();
        let _ = self
            .live_bytes
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |live| {
                Some(live.saturating_sub(len))
            });
        if let Ok(mut stats) = self.stats.lock() {
            stats.record_release();
        }

        let region = storage.into_vec();
        if let Some(class) = release_class_for(region.capacity()) {
            self.free_list_bytes
                .fetch_add(region.capacity(), Ordering::Release);
            if let Ok(mut free) = self.free_regions.lock() {
                free.entry(class).or_default().push(region);
            }
        }
        tracing::debug!(byte_count = len, "arena release");
    }

    fn reallocate(
        &self,
        storage: &mut Storage,
        old_byte_count: usize,
        new_byte_count: usize,
    ) -> Result<(), AllocError> {
        debug_assert_eq!(storage.len(), old_byte_count);
        if new_byte_count == 0 {
            return Err(AllocError::ZeroSizedAllocation);
        }
        if new_byte_count > old_byte_count {
            self.check_budget(new_byte_count - old_byte_count)?;
        }

        storage.try_resize(new_byte_count)?;

        if new_byte_count > old_byte_count {
            self.add_live(new_byte_count - old_byte_count);
        } else {
            self.live_bytes
                .fetch_sub(old_byte_count - new_byte_count, Ordering::AcqRel);
        }
        if let Ok(mut stats) = self.stats.lock() {
            stats.record_reallocation();
        }
        tracing::debug!(old_byte_count, new_byte_count, "arena reallocate");
        Ok(())
    }
}

impl std::fmt::Debug for ArenaAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArenaAllocator")
            .field("budget", &self.budget)
            .field("live_bytes", &self.live_bytes())
            .field("free_list_bytes", &self.free_list_bytes())
            .finish()
    }
}

/// Bin a request is served from: smallest power of two ≥ `byte_count`.
fn request_class_for(byte_count: usize) -> Option<usize> {
    byte_count.max(MIN_SIZE_CLASS).checked_next_power_of_two()
}

/// Bin a released region goes to: largest power of two ≤ `capacity`.
fn release_class_for(capacity: usize) -> Option<usize> {
    if capacity < MIN_SIZE_CLASS {
        return None;
    }
    Some(1usize << (usize::BITS - 1 - capacity.leading_zeros()))
}
