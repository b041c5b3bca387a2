//! primes-core
//!
//! The numeric routines behind the primes demo:
//! - Sieve of Eratosthenes over one-based candidates
//! - Sieve to prime list conversion with a caller-supplied count
//! - Fixed-layout C ABI for calling across a language boundary
//! - Library handles so callers receive the routines explicitly
//! - Python bindings (pyo3, optional)

pub mod convert;
pub mod error;
pub mod ffi;
pub mod library;
pub mod sieve;

#[cfg(feature = "python")]
mod python;

pub use convert::logical_to_integer;
pub use error::SieveError;
pub use library::{AbiLibrary, NativeLibrary, SieveLibrary};
pub use sieve::{compute_sieve, prime_count};
