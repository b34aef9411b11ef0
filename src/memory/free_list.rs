/*!
 * Free List
 * Address-ordered set of disjoint free regions with adjacency coalescing
 */

use super::types::Region;
use crate::core::types::{Address, Size};

/// Ordered collection of the currently free regions of the pool
///
/// Invariants held between public operations on the release path:
/// - regions are strictly increasing by address
/// - regions are pairwise disjoint
/// - no region is empty, and no two regions are address-adjacent
///   (`coalesce` merges them)
///
/// The list is a plain owned value; the manager is its sole owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeList {
    regions: Vec<Region>,
}

impl FreeList {
    /// Create a list with a single region spanning `[0, total_size)`
    pub fn new(total_size: Size) -> Self {
        debug_assert!(total_size > 0, "pool must span at least one unit");
        Self {
            regions: vec![Region::new(0, total_size)],
        }
    }

    /// Insert a region, preserving address order
    ///
    /// This is the only mutation that can introduce adjacency, so the
    /// release path must follow it with `coalesce`.
    pub fn insert(&mut self, region: Region) {
        if region.size == 0 {
            return;
        }
        let at = self
            .regions
            .partition_point(|r| r.address < region.address);
        self.regions.insert(at, region);
    }

    /// Merge address-adjacent neighbors
    ///
    /// A single linear pass reaches the fixed point: the list is kept
    /// address-sorted, so adjacency can only arise between list neighbors.
    pub fn coalesce(&mut self) {
        let mut merged: Vec<Region> = Vec::with_capacity(self.regions.len());
        for region in self.regions.drain(..) {
            match merged.last_mut() {
                Some(prev) if prev.is_adjacent_to(&region) => prev.size += region.size,
                _ => merged.push(region),
            }
        }
        self.regions = merged;
    }

    /// Consume `size` units from the low end of the region at `index`
    ///
    /// Returns the base address handed to the caller. The region shrinks to
    /// `{address + size, old_size - size}` and is removed entirely when
    /// nothing remains. Index validity and fit are the caller's contract:
    /// the index came from a policy scan over this same list.
    pub(super) fn take_from(&mut self, index: usize, size: Size) -> Address {
        debug_assert!(size > 0 && self.regions[index].fits(size));
        let address = self.regions[index].address;
        self.regions[index].address += size;
        self.regions[index].size -= size;
        if self.regions[index].size == 0 {
            self.regions.remove(index);
        }
        address
    }

    /// Free regions in address order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Iterate regions in address order
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Number of free regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Sum of all free region sizes
    pub fn total_free(&self) -> Size {
        self.regions.iter().map(|r| r.size).sum()
    }

    /// Size of the largest free region, 0 when the pool is exhausted
    pub fn largest(&self) -> Size {
        self.regions.iter().map(|r| r.size).max().unwrap_or(0)
    }
}
