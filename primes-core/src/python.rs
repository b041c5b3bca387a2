//! Python bindings for primes-core
//!
//! Exposes the sieve to a host Python process as `primes.primes`, with the
//! entry points `pysieve` and `pylogical_to_integer`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::convert::logical_to_integer;
use crate::error::SieveError;
use crate::sieve::compute_sieve;

fn to_py_error(e: SieveError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Primality flags for candidates `1..=bound`
#[pyfunction]
fn pysieve(bound: i32) -> PyResult<Vec<bool>> {
    compute_sieve(bound).map_err(to_py_error)
}

/// One-based positions of the true entries of `sieve`
///
/// Args:
///     sieve: Flags as returned by `pysieve`
///     count: Number of true entries, usually `sum(sieve)`
///
/// Raises:
///     ValueError: if `count` does not match the sieve
#[pyfunction]
fn pylogical_to_integer(sieve: Vec<bool>, count: i32) -> PyResult<Vec<i32>> {
    logical_to_integer(&sieve, count).map_err(to_py_error)
}

/// primes Python module
#[pymodule]
fn primes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let inner = PyModule::new_bound(m.py(), "primes")?;
    inner.add_function(wrap_pyfunction!(pysieve, &inner)?)?;
    inner.add_function(wrap_pyfunction!(pylogical_to_integer, &inner)?)?;
    m.add_submodule(&inner)?;
    Ok(())
}
