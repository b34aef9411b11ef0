/*!
 * System Limits and Constants
 *
 * Centralized location for pool sizing, registry capacities, and name
 * limits. Values are grouped by domain.
 */

use crate::core::types::Size;

/// Total simulated memory pool (1000 units)
/// Default capacity for the memory manager
pub const DEFAULT_MEMORY_POOL: Size = 1000;

/// Fixed capacity of the allocated-block table
pub const DEFAULT_BLOCK_TABLE_CAPACITY: usize = 10;

/// Fixed capacity of the job table
pub const DEFAULT_JOB_TABLE_CAPACITY: usize = 10;

/// Maximum stored length of a job name, in bytes
pub const MAX_JOB_NAME_LEN: usize = 20;
