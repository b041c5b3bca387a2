//! Sieve to integer conversion
//!
//! The caller supplies the number of primes up front and it sizes the output
//! buffer. A count that disagrees with the sieve is an error, never a
//! truncated or padded result.

use tracing::debug;

use crate::error::SieveError;
use crate::sieve::prime_count;

/// Collect the one-based positions of the true entries of `sieve`.
///
/// Returns exactly `count` positions in ascending order.
pub fn logical_to_integer(sieve: &[bool], count: i32) -> Result<Vec<i32>, SieveError> {
    if count < 0 {
        return Err(SieveError::InvalidCount { count });
    }
    let mut positions = Vec::with_capacity(count as usize);
    for (k, _) in sieve.iter().enumerate().filter(|(_, &is_prime)| is_prime) {
        if positions.len() == count as usize {
            return Err(SieveError::count_mismatch(count, prime_count(sieve)));
        }
        positions.push((k + 1) as i32);
    }

    if positions.len() != count as usize {
        return Err(SieveError::count_mismatch(count, positions.len() as i32));
    }

    debug!("Converted sieve of {} entries into {} positions", sieve.len(), count);
    Ok(positions)
}
