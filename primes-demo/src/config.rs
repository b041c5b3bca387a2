//! Demo configuration
//!
//! The binary always runs with the defaults. The struct exists so the driver
//! can be exercised at other bounds and against either library handle.

use primes_core::{AbiLibrary, NativeLibrary, SieveLibrary};

/// Bound the demo sieves up to
pub const DEFAULT_BOUND: i32 = 100;

/// Which library handle the driver is given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Direct Rust calls
    Native,
    /// Calls across the C ABI
    Abi,
}

impl Backend {
    pub fn library(&self) -> Box<dyn SieveLibrary> {
        match self {
            Backend::Native => Box::new(NativeLibrary),
            Backend::Abi => Box::new(AbiLibrary),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub bound: i32,
    pub backend: Backend,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            backend: Backend::Abi,
        }
    }
}
