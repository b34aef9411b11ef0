/*!
 * Memory Manager
 * Policy-driven allocation and release over the free list
 */

use super::free_list::FreeList;
use super::traits::{Allocator, MemoryInfo};
use super::types::{MemoryError, MemoryResult, MemoryStats, PlacementPolicy, Region};
use crate::core::limits::DEFAULT_MEMORY_POOL;
use crate::core::types::{Address, Size};
use ahash::AHashMap;
use log::{info, warn};

/// Variable-partition memory manager
///
/// Owns the free list and the map of outstanding allocations. Every
/// operation takes `&mut self` and runs to completion; callers that share a
/// manager across threads must serialize access behind one exclusive lock,
/// since allocate and release are not safe to interleave.
#[derive(Debug, Clone)]
pub struct MemoryManager {
    free_list: FreeList,
    // Outstanding allocations keyed by base address. Releases are validated
    // against this map before they touch the free list, so a bad pair can
    // never fabricate overlapping free regions.
    allocated: AHashMap<Address, Size>,
    total_memory: Size,
}

impl MemoryManager {
    /// Create a manager over the default pool
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_POOL)
    }

    /// Create a manager with a custom pool size (useful for testing)
    ///
    /// `total_size` must be positive.
    pub fn with_capacity(total_size: Size) -> Self {
        debug_assert!(total_size > 0, "pool must span at least one unit");
        info!("memory manager initialized with a {total_size} unit pool");
        Self {
            free_list: FreeList::new(total_size),
            allocated: AHashMap::new(),
            total_memory: total_size,
        }
    }

    /// Allocate `size` units under the given placement policy
    ///
    /// The chosen region is consumed from its low address end. On a miss the
    /// free list is left untouched and the out-of-memory result carries
    /// exhaustion diagnostics; fragmentation means total free capacity does
    /// not imply satisfiability.
    pub fn allocate(&mut self, size: Size, policy: PlacementPolicy) -> MemoryResult<Address> {
        if size == 0 {
            return Err(MemoryError::InvalidSize);
        }

        let Some(index) = policy.select(self.free_list.regions(), size) else {
            let err = MemoryError::OutOfMemory {
                requested: size,
                largest_free: self.free_list.largest(),
                total_free: self.free_list.total_free(),
            };
            warn!("{policy} allocation failed: {err}");
            return Err(err);
        };

        let address = self.free_list.take_from(index, size);
        self.allocated.insert(address, size);
        info!("allocated {size} units at address {address} ({policy})");
        Ok(address)
    }

    /// Return a previously allocated pair to the free pool
    ///
    /// The pair must exactly match an outstanding allocation; anything else
    /// is rejected with `InvalidRelease` and leaves the free list untouched.
    /// On success the region is re-inserted in address order and merged with
    /// any address-adjacent neighbors.
    pub fn release(&mut self, address: Address, size: Size) -> MemoryResult<()> {
        if size == 0 {
            return Err(MemoryError::InvalidSize);
        }
        if self.allocated.get(&address) != Some(&size) {
            warn!("rejected release of {size} units at address {address}: no matching outstanding allocation");
            return Err(MemoryError::InvalidRelease { address, size });
        }

        self.allocated.remove(&address);
        self.free_list.insert(Region::new(address, size));
        self.free_list.coalesce();
        info!("released {size} units at address {address}");
        Ok(())
    }

    /// Free regions in address order, for reporting
    pub fn free_regions(&self) -> &[Region] {
        self.free_list.regions()
    }

    /// Number of outstanding allocations
    pub fn outstanding(&self) -> usize {
        self.allocated.len()
    }

    /// Total pool size
    pub fn total_memory(&self) -> Size {
        self.total_memory
    }

    /// Snapshot of overall memory statistics
    pub fn stats(&self) -> MemoryStats {
        let available = self.free_list.total_free();
        let used = self.total_memory - available;
        MemoryStats {
            total_memory: self.total_memory,
            used_memory: used,
            available_memory: available,
            usage_percentage: (used as f64 / self.total_memory as f64) * 100.0,
            free_regions: self.free_list.len(),
            largest_free_region: self.free_list.largest(),
            allocated_blocks: self.allocated.len(),
        }
    }
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Allocator for MemoryManager {
    fn allocate(&mut self, size: Size, policy: PlacementPolicy) -> MemoryResult<Address> {
        MemoryManager::allocate(self, size, policy)
    }

    fn release(&mut self, address: Address, size: Size) -> MemoryResult<()> {
        MemoryManager::release(self, address, size)
    }
}

impl MemoryInfo for MemoryManager {
    fn stats(&self) -> MemoryStats {
        MemoryManager::stats(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        let stats = self.stats();
        (
            stats.total_memory,
            stats.used_memory,
            stats.available_memory,
        )
    }
}
