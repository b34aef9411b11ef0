/*!
 * Variable-Partition Memory Simulator
 * Free-list allocation with first-fit, best-fit, and worst-fit placement
 */

pub mod core;
pub mod memory;
pub mod registry;
pub mod report;

// Re-exports
pub use memory::{
    Allocator, FreeList, MemoryError, MemoryInfo, MemoryManager, MemoryResult, MemoryStats,
    PlacementPolicy, Region,
};
pub use registry::{BlockEntry, JobRecord, RegistryError, RegistryResult, Slot, SlotTable};
