/*!
 * Memory Types
 * Common types for variable-partition allocation
 */

use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Out of memory: requested {requested} units, largest free region {largest_free} units ({total_free} units free in total)")]
    OutOfMemory {
        requested: Size,
        largest_free: Size,
        total_free: Size,
    },

    #[error("Invalid size: requests must span at least one unit")]
    InvalidSize,

    #[error("Invalid release: no outstanding allocation of {size} units at address {address}")]
    InvalidRelease { address: Address, size: Size },
}

/// One contiguous span of unused address space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub address: Address,
    pub size: Size,
}

impl Region {
    pub fn new(address: Address, size: Size) -> Self {
        Self { address, size }
    }

    /// One past the last unit covered by this region
    pub fn end(&self) -> Address {
        self.address + self.size
    }

    /// Whether `other` begins exactly where this region ends
    pub fn is_adjacent_to(&self, other: &Region) -> bool {
        self.end() == other.address
    }

    /// Whether a request for `size` units fits in this region
    pub fn fits(&self, size: Size) -> bool {
        self.size >= size
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "start = {}, size = {}", self.address, self.size)
    }
}

/// Placement strategy for choosing which free region satisfies a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementPolicy {
    /// First region in address order that is large enough
    FirstFit,
    /// Smallest region that is still large enough
    BestFit,
    /// Largest region that is large enough
    WorstFit,
}

impl PlacementPolicy {
    /// All policies, in scan-comparison order (useful for drivers and tests)
    pub const ALL: [PlacementPolicy; 3] = [
        PlacementPolicy::FirstFit,
        PlacementPolicy::BestFit,
        PlacementPolicy::WorstFit,
    ];
}

impl fmt::Display for PlacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlacementPolicy::FirstFit => write!(f, "first-fit"),
            PlacementPolicy::BestFit => write!(f, "best-fit"),
            PlacementPolicy::WorstFit => write!(f, "worst-fit"),
        }
    }
}

/// Memory statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub available_memory: Size,
    pub usage_percentage: f64,
    pub free_regions: usize,
    pub largest_free_region: Size,
    pub allocated_blocks: usize,
}

impl MemoryStats {
    /// Total free space would cover `size` but no single region does
    pub fn is_fragmented_for(&self, size: Size) -> bool {
        self.available_memory >= size && self.largest_free_region < size
    }
}
