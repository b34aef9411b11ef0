/*!
 * Memory Traits
 * Allocation and introspection abstractions
 */

use super::types::{MemoryResult, MemoryStats, PlacementPolicy};
use crate::core::types::{Address, Size};

/// Variable-partition allocator interface
pub trait Allocator {
    /// Allocate `size` units under the given placement policy
    fn allocate(&mut self, size: Size, policy: PlacementPolicy) -> MemoryResult<Address>;

    /// Return a previously allocated `(address, size)` pair to the free pool
    fn release(&mut self, address: Address, size: Size) -> MemoryResult<()>;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Get memory info as (total, used, available)
    fn info(&self) -> (Size, Size, Size);
}
