//! C ABI for primes-core
//!
//! The stable, fixed-layout entry points a host program calls across the
//! language boundary. Every buffer is allocated by the caller; the library
//! only fills it.
//!
//! Layout:
//! - a sieve is an array of 4-byte logicals (`i32`, zero is false, anything
//!   else is true), one per candidate `1..=bound`
//! - bounds, counts and positions are `i32`
//! - every entry point returns a [`SieveStatus`] code, zero on success

use std::slice;

use tracing::error;

use crate::convert::logical_to_integer;
use crate::error::SieveError;
use crate::sieve::compute_sieve;

/// C ABI version. Bump whenever an entry point signature or layout changes.
pub const ABI_VERSION: u32 = 1;

/// Boolean as it crosses the boundary
pub type Logical = i32;

pub const LOGICAL_FALSE: Logical = 0;
pub const LOGICAL_TRUE: Logical = 1;

/// Status codes returned by every entry point
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveStatus {
    Ok = 0,
    InvalidBound = 1,
    InvalidCount = 2,
    CountMismatch = 3,
    NullPointer = 4,
    LengthMismatch = 5,
}

impl SieveStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(SieveStatus::Ok),
            1 => Some(SieveStatus::InvalidBound),
            2 => Some(SieveStatus::InvalidCount),
            3 => Some(SieveStatus::CountMismatch),
            4 => Some(SieveStatus::NullPointer),
            5 => Some(SieveStatus::LengthMismatch),
            _ => None,
        }
    }
}

impl SieveError {
    /// Status code reported across the ABI for this error
    pub fn status_code(&self) -> i32 {
        match self {
            SieveError::InvalidBound { .. } => SieveStatus::InvalidBound as i32,
            SieveError::InvalidCount { .. } => SieveStatus::InvalidCount as i32,
            SieveError::CountMismatch { .. } => SieveStatus::CountMismatch as i32,
            SieveError::NullPointer { .. } => SieveStatus::NullPointer as i32,
            SieveError::LengthMismatch { .. } => SieveStatus::LengthMismatch as i32,
            SieveError::Status(code) => *code,
        }
    }
}

fn fail(e: SieveError) -> i32 {
    error!("primes-core ABI call failed: {}", e);
    e.status_code()
}

/// Get the C ABI version
#[no_mangle]
pub extern "C" fn primes_abi_version() -> u32 {
    ABI_VERSION
}

/// Fill `flags` with the sieve for `bound`.
///
/// `len` must equal `bound`.
///
/// # Safety
///
/// `flags` must point to `len` writable logicals, or may be null when `len`
/// is zero.
#[no_mangle]
pub unsafe extern "C" fn primes_sieve(bound: i32, flags: *mut Logical, len: i32) -> i32 {
    if bound < 0 {
        return fail(SieveError::invalid_bound(bound));
    }
    if len != bound {
        return fail(SieveError::length_mismatch(bound, len));
    }
    if len == 0 {
        return SieveStatus::Ok as i32;
    }
    if flags.is_null() {
        return fail(SieveError::NullPointer { len });
    }

    let sieve = match compute_sieve(bound) {
        Ok(sieve) => sieve,
        Err(e) => return fail(e),
    };

    let out = slice::from_raw_parts_mut(flags, len as usize);
    for (slot, is_prime) in out.iter_mut().zip(sieve) {
        *slot = if is_prime { LOGICAL_TRUE } else { LOGICAL_FALSE };
    }

    SieveStatus::Ok as i32
}

/// Write the one-based positions of the true entries of `flags` into `out`.
///
/// `count` is the number of true entries the caller expects and the length of
/// `out`; a sieve holding a different number of primes is rejected with
/// [`SieveStatus::CountMismatch`] and `out` is left untouched.
///
/// # Safety
///
/// `flags` must point to `len` readable logicals and `out` to `count`
/// writable `i32`s. Either may be null when its length is zero.
#[no_mangle]
pub unsafe extern "C" fn primes_logical_to_integer(
    flags: *const Logical,
    len: i32,
    count: i32,
    out: *mut i32,
) -> i32 {
    if len < 0 {
        return fail(SieveError::length_mismatch(0, len));
    }
    if count < 0 {
        return fail(SieveError::InvalidCount { count });
    }
    if len > 0 && flags.is_null() {
        return fail(SieveError::NullPointer { len });
    }
    if count > 0 && out.is_null() {
        return fail(SieveError::NullPointer { len: count });
    }

    let sieve: Vec<bool> = if len == 0 {
        Vec::new()
    } else {
        slice::from_raw_parts(flags, len as usize)
            .iter()
            .map(|&flag| flag != LOGICAL_FALSE)
            .collect()
    };

    let positions = match logical_to_integer(&sieve, count) {
        Ok(positions) => positions,
        Err(e) => return fail(e),
    };

    if count > 0 {
        slice::from_raw_parts_mut(out, count as usize).copy_from_slice(&positions);
    }

    SieveStatus::Ok as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_abi_version() {
        assert_eq!(primes_abi_version(), 1);
    }

    #[test]
    fn test_sieve_through_abi() {
        let mut flags = vec![-1; 10];
        let status = unsafe { primes_sieve(10, flags.as_mut_ptr(), 10) };

        assert_eq!(status, SieveStatus::Ok as i32);
        assert_eq!(flags, vec![0, 1, 1, 0, 1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_sieve_rejects_bad_arguments() {
        let mut flags = vec![0; 4];
        unsafe {
            assert_eq!(
                primes_sieve(-3, flags.as_mut_ptr(), 4),
                SieveStatus::InvalidBound as i32
            );
            assert_eq!(
                primes_sieve(5, flags.as_mut_ptr(), 4),
                SieveStatus::LengthMismatch as i32
            );
            assert_eq!(
                primes_sieve(4, ptr::null_mut(), 4),
                SieveStatus::NullPointer as i32
            );
            assert_eq!(primes_sieve(0, ptr::null_mut(), 0), SieveStatus::Ok as i32);
        }
    }

    #[test]
    fn test_convert_through_abi() {
        // any non-zero logical counts as true
        let flags = [0, 1, 7, 0, -1];
        let mut out = vec![0; 3];
        let status =
            unsafe { primes_logical_to_integer(flags.as_ptr(), 5, 3, out.as_mut_ptr()) };

        assert_eq!(status, SieveStatus::Ok as i32);
        assert_eq!(out, vec![2, 3, 5]);
    }

    #[test]
    fn test_convert_mismatched_count_leaves_buffer() {
        let flags = [0, 1, 1, 0, 1];
        let mut out = vec![0; 2];
        let status =
            unsafe { primes_logical_to_integer(flags.as_ptr(), 5, 2, out.as_mut_ptr()) };

        assert_eq!(status, SieveStatus::CountMismatch as i32);
        assert_eq!(out, vec![0, 0]);
    }

    #[test]
    fn test_convert_empty() {
        let status =
            unsafe { primes_logical_to_integer(ptr::null(), 0, 0, ptr::null_mut()) };
        assert_eq!(status, SieveStatus::Ok as i32);
    }

    #[test]
    fn test_status_codes_round_trip() {
        for code in 0..=5 {
            assert_eq!(SieveStatus::from_code(code).map(|s| s as i32), Some(code));
        }
        assert_eq!(SieveStatus::from_code(42), None);
    }
}
