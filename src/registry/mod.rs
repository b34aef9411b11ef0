/*!
 * Registry Module
 * Fixed-capacity bookkeeping tables for blocks and jobs
 */

pub mod table;
pub mod types;

// Re-export for convenience
pub use table::{Slot, SlotTable};
pub use types::{BlockEntry, JobRecord, RegistryError, RegistryResult};
