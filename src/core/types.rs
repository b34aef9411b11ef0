/*!
 * Core Types
 * Common types used across the simulator
 */

/// Address type for memory operations (unit offset into the pool)
pub type Address = usize;

/// Size type for memory operations
pub type Size = usize;
