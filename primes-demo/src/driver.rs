//! Prime Demo Driver
//!
//! Sequences the two library calls and prints the result. Every stage blocks
//! until the previous one has finished; a failure in the library ends the run.

use std::io::Write;

use anyhow::{Context, Result};
use primes_core::{prime_count, SieveLibrary};
use tracing::debug;

/// Where a run has got to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    SieveComputed,
    CountComputed,
    ListConverted,
    Printed,
    Done,
}

pub struct Driver<'a> {
    library: &'a dyn SieveLibrary,
    stage: Stage,
}

impl<'a> Driver<'a> {
    pub fn new(library: &'a dyn SieveLibrary) -> Self {
        Self {
            library,
            stage: Stage::Start,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn advance(&mut self, next: Stage) {
        debug!("Stage {:?} -> {:?}", self.stage, next);
        self.stage = next;
    }

    /// Compute the sieve for `bound`, count it, and convert it to a prime list.
    pub fn primes(&mut self, bound: i32) -> Result<Vec<i32>> {
        self.stage = Stage::Start;

        let sieve = self
            .library
            .compute_sieve(bound)
            .with_context(|| format!("computing sieve for bound {}", bound))?;
        self.advance(Stage::SieveComputed);

        let count = prime_count(&sieve);
        self.advance(Stage::CountComputed);

        let primes = self
            .library
            .logical_to_integer(&sieve, count)
            .with_context(|| {
                format!("converting sieve of {} entries with count {}", sieve.len(), count)
            })?;
        self.advance(Stage::ListConverted);

        Ok(primes)
    }

    /// Write `primes` to `out` as a single line.
    pub fn report<W: Write>(&mut self, primes: &[i32], out: &mut W) -> Result<()> {
        writeln!(out, "{}", format_list(primes)).context("writing prime list")?;
        out.flush().context("flushing prime list")?;
        self.advance(Stage::Printed);
        Ok(())
    }

    /// Run every stage for `bound`, printing to `out`.
    pub fn run<W: Write>(&mut self, bound: i32, out: &mut W) -> Result<Vec<i32>> {
        let primes = self.primes(bound)?;
        self.report(&primes, out)?;
        self.advance(Stage::Done);
        Ok(primes)
    }
}

/// Bracketed, comma separated: `[2, 3, 5]`, or `[]` when empty
pub fn format_list(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Backend, DemoConfig};
    use primes_core::{NativeLibrary, SieveError};

    const PRIMES_TO_100: &str = "[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, \
                                 59, 61, 67, 71, 73, 79, 83, 89, 97]\n";

    fn run_to_string(backend: Backend, bound: i32) -> (Stage, String) {
        let library = backend.library();
        let mut driver = Driver::new(library.as_ref());
        let mut out = Vec::new();
        driver.run(bound, &mut out).unwrap();
        (driver.stage(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default_run() {
        let config = DemoConfig::default();
        assert_eq!(config.bound, 100);
        assert_eq!(config.backend, Backend::Abi);

        let (stage, output) = run_to_string(config.backend, config.bound);
        assert_eq!(stage, Stage::Done);
        assert_eq!(output, PRIMES_TO_100);
    }

    #[test]
    fn test_backends_print_the_same() {
        for bound in [0, 1, 2, 3, 10, 100, 1000] {
            assert_eq!(
                run_to_string(Backend::Native, bound),
                run_to_string(Backend::Abi, bound),
                "bound {}",
                bound
            );
        }
    }

    #[test]
    fn test_boundary_bounds() {
        assert_eq!(run_to_string(Backend::Abi, 1).1, "[]\n");
        assert_eq!(run_to_string(Backend::Abi, 2).1, "[2]\n");
    }

    #[test]
    fn test_prime_list_length_matches_count() {
        let mut driver = Driver::new(&NativeLibrary);
        let primes = driver.primes(1000).unwrap();
        assert_eq!(primes.len(), 168);
        assert_eq!(driver.stage(), Stage::ListConverted);
    }

    #[test]
    fn test_library_failure_propagates() {
        let library = Backend::Abi.library();
        let mut driver = Driver::new(library.as_ref());
        let mut out = Vec::new();

        let err = driver.run(-1, &mut out).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SieveError>(),
            Some(&SieveError::InvalidBound { bound: -1 })
        );
        assert!(err.to_string().contains("computing sieve for bound -1"));
        assert_eq!(driver.stage(), Stage::Start);
        assert!(out.is_empty());
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[]), "[]");
        assert_eq!(format_list(&[7]), "[7]");
        assert_eq!(format_list(&[2, 3, 5]), "[2, 3, 5]");
    }
}
