//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Neither a batch file nor a complete single registration was given
    MissingInput,
    /// Some registrations were rejected
    RegistrationRejected {
        /// Number of rejected requests
        rejected: usize,
        /// Number of processed requests
        total: usize,
    },
    /// Some aggregates could not be computed
    AggregateFailed(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MissingInput => write!(
                f,
                "Provide --input FILE or all of --username, --email and --password"
            ),
            CliError::RegistrationRejected { rejected, total } => {
                write!(f, "{rejected} of {total} registration(s) rejected")
            }
            CliError::AggregateFailed(count) => {
                write!(f, "{count} aggregate(s) could not be computed")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
