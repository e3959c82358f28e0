//! Colligo CLI library
//!
//! This library provides the command-line interface for Colligo: batch
//! registration with classified error reporting, numeric aggregates and
//! configuration generation.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity-derived default.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
