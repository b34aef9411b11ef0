/*!
 * Registry Types
 * Entry records and errors for the bookkeeping tables
 */

use crate::core::limits::MAX_JOB_NAME_LEN;
use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Registry operation result
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Table full: all {capacity} slots are occupied")]
    TableFull { capacity: usize },

    #[error("Job name too long: {len} bytes, maximum {max}")]
    NameTooLong { len: usize, max: usize },
}

/// Metadata for one outstanding allocation, recorded by the caller from a
/// successful allocate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntry {
    pub address: Address,
    pub size: Size,
}

impl BlockEntry {
    pub fn new(address: Address, size: Size) -> Self {
        Self { address, size }
    }
}

impl fmt::Display for BlockEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "start = {}, size = {}", self.address, self.size)
    }
}

/// Named allocation request kept by the surrounding application
///
/// The name is pure metadata; it never participates in allocation decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    name: String,
    requested_size: Size,
}

impl JobRecord {
    /// Create a record; names are limited to `MAX_JOB_NAME_LEN` bytes
    pub fn new(name: impl Into<String>, requested_size: Size) -> RegistryResult<Self> {
        let name = name.into();
        if name.len() > MAX_JOB_NAME_LEN {
            return Err(RegistryError::NameTooLong {
                len: name.len(),
                max: MAX_JOB_NAME_LEN,
            });
        }
        Ok(Self {
            name,
            requested_size,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requested_size(&self) -> Size {
        self.requested_size
    }
}

impl fmt::Display for JobRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "name = {}, requested = {}", self.name, self.requested_size)
    }
}
