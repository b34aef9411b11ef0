/*!
 * Core Module
 * Shared types and system limits
 */

pub mod limits;
pub mod types;

pub use types::{Address, Size};
