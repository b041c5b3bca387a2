//! primes-demo
//!
//! Prints the primes up to 100. The sieve and the conversion to integers
//! both run inside primes-core, reached through its C ABI.

use std::io;

use anyhow::Result;
use tracing::info;

mod config;
mod driver;

use config::DemoConfig;
use driver::Driver;

fn main() -> Result<()> {
    // Logs go to stderr (stdout carries the result line)
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    let config = DemoConfig::default();
    let library = config.backend.library();

    info!(
        "primes-demo starting: bound={}, library={}",
        config.bound,
        library.name()
    );

    let mut driver = Driver::new(library.as_ref());
    let stdout = io::stdout();
    let primes = driver.run(config.bound, &mut stdout.lock())?;

    info!("primes-demo printed {} primes", primes.len());
    Ok(())
}
