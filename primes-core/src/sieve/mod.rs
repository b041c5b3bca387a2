//! Sieve of Eratosthenes
//!
//! Candidates are one-based: entry `k` of a sieve describes the integer
//! `k + 1`, and the sieve for `bound` covers `1..=bound`.

use tracing::debug;

use crate::error::SieveError;

/// Mark the primes in `1..=bound`.
///
/// Returns a sieve of exactly `bound` entries. A zero bound yields an empty
/// sieve; a negative bound is rejected.
pub fn compute_sieve(bound: i32) -> Result<Vec<bool>, SieveError> {
    if bound < 0 {
        return Err(SieveError::invalid_bound(bound));
    }

    let n = bound as usize;
    let mut flags = vec![true; n];

    // 1 is not prime
    if let Some(first) = flags.first_mut() {
        *first = false;
    }

    let mut p = 2usize;
    while p * p <= n {
        if flags[p - 1] {
            for multiple in (p * p..=n).step_by(p) {
                flags[multiple - 1] = false;
            }
        }
        p += 1;
    }

    debug!("Computed sieve for bound {}", bound);
    Ok(flags)
}

/// Number of true entries in a sieve, saturating at `i32::MAX`.
pub fn prime_count(sieve: &[bool]) -> i32 {
    let count = sieve.iter().filter(|&&is_prime| is_prime).count();
    i32::try_from(count).unwrap_or(i32::MAX)
}
