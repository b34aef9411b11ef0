/*!
 * Memory Module
 * Variable-partition allocation with pluggable placement policies
 */

pub mod free_list;
pub mod manager;
pub mod policy;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use free_list::FreeList;
pub use manager::MemoryManager;
pub use traits::*;
pub use types::*;
