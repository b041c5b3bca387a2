//! Library handles
//!
//! A driver never reaches for the sieve routines through a global import.
//! It is handed a [`SieveLibrary`] and only talks to that. Two handles are
//! provided: [`NativeLibrary`] calls the Rust API directly and
//! [`AbiLibrary`] goes through the C ABI in [`crate::ffi`], marshalling
//! booleans to 4-byte logicals and back.

use tracing::debug;

use crate::convert;
use crate::error::SieveError;
use crate::ffi::{self, Logical, SieveStatus, LOGICAL_FALSE};
use crate::sieve;

/// The calling contract of the numeric sieve routines
pub trait SieveLibrary {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Primality flags for candidates `1..=bound`
    fn compute_sieve(&self, bound: i32) -> Result<Vec<bool>, SieveError>;

    /// One-based positions of the true entries of `sieve`, exactly `count` of them
    fn logical_to_integer(&self, sieve: &[bool], count: i32) -> Result<Vec<i32>, SieveError>;
}

/// Direct calls into the Rust implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeLibrary;

impl SieveLibrary for NativeLibrary {
    fn name(&self) -> &'static str {
        "native"
    }

    fn compute_sieve(&self, bound: i32) -> Result<Vec<bool>, SieveError> {
        sieve::compute_sieve(bound)
    }

    fn logical_to_integer(&self, sieve: &[bool], count: i32) -> Result<Vec<i32>, SieveError> {
        convert::logical_to_integer(sieve, count)
    }
}

/// Calls through the `extern "C"` entry points with caller-allocated buffers
#[derive(Debug, Default, Clone, Copy)]
pub struct AbiLibrary;

impl AbiLibrary {
    pub fn abi_version(&self) -> u32 {
        ffi::primes_abi_version()
    }
}

impl SieveLibrary for AbiLibrary {
    fn name(&self) -> &'static str {
        "abi"
    }

    fn compute_sieve(&self, bound: i32) -> Result<Vec<bool>, SieveError> {
        let len = bound.max(0);
        let mut flags: Vec<Logical> = vec![LOGICAL_FALSE; len as usize];

        debug!("Crossing into primes_sieve(bound={})", bound);
        // SAFETY: `flags` holds exactly `len` logicals
        let code = unsafe { ffi::primes_sieve(bound, flags.as_mut_ptr(), len) };
        debug!("Returned from primes_sieve with status {}", code);

        match SieveStatus::from_code(code) {
            Some(SieveStatus::Ok) => Ok(flags.into_iter().map(|f| f != LOGICAL_FALSE).collect()),
            Some(SieveStatus::InvalidBound) => Err(SieveError::invalid_bound(bound)),
            Some(SieveStatus::LengthMismatch) => Err(SieveError::length_mismatch(bound, len)),
            Some(SieveStatus::NullPointer) => Err(SieveError::NullPointer { len }),
            _ => Err(SieveError::Status(code)),
        }
    }

    fn logical_to_integer(&self, sieve: &[bool], count: i32) -> Result<Vec<i32>, SieveError> {
        // Sieves longer than i32::MAX entries cannot be described by the ABI
        let len = i32::try_from(sieve.len())
            .map_err(|_| SieveError::length_mismatch(i32::MAX, i32::MAX))?;
        let flags: Vec<Logical> = sieve.iter().map(|&p| Logical::from(p)).collect();
        let mut out = vec![0i32; count.max(0) as usize];

        debug!(
            "Crossing into primes_logical_to_integer(len={}, count={})",
            len, count
        );
        // SAFETY: `flags` holds `len` logicals and `out` holds `count` slots
        let code =
            unsafe { ffi::primes_logical_to_integer(flags.as_ptr(), len, count, out.as_mut_ptr()) };
        debug!("Returned from primes_logical_to_integer with status {}", code);

        match SieveStatus::from_code(code) {
            Some(SieveStatus::Ok) => Ok(out),
            Some(SieveStatus::InvalidCount) => Err(SieveError::InvalidCount { count }),
            Some(SieveStatus::CountMismatch) => {
                Err(SieveError::count_mismatch(count, sieve::prime_count(sieve)))
            }
            Some(SieveStatus::LengthMismatch) => Err(SieveError::length_mismatch(0, len)),
            Some(SieveStatus::NullPointer) => Err(SieveError::NullPointer { len }),
            _ => Err(SieveError::Status(code)),
        }
    }
}
