//! Sieve error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SieveError {
    #[error("Invalid bound: {bound} (must be non-negative)")]
    InvalidBound { bound: i32 },

    #[error("Invalid prime count: {count} (must be non-negative)")]
    InvalidCount { count: i32 },

    #[error("Prime count mismatch: caller supplied {expected}, sieve holds {found}")]
    CountMismatch { expected: i32, found: i32 },

    #[error("Buffer length mismatch: expected {expected} entries, got {found}")]
    LengthMismatch { expected: i32, found: i32 },

    #[error("Null pointer passed for a buffer of {len} entries")]
    NullPointer { len: i32 },

    #[error("Unknown status code returned across the ABI: {0}")]
    Status(i32),
}

impl SieveError {
    pub fn invalid_bound(bound: i32) -> Self {
        SieveError::InvalidBound { bound }
    }

    pub fn count_mismatch(expected: i32, found: i32) -> Self {
        SieveError::CountMismatch { expected, found }
    }

    pub fn length_mismatch(expected: i32, found: i32) -> Self {
        SieveError::LengthMismatch { expected, found }
    }
}
