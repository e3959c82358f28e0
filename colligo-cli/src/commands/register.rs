//! Register command implementation

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colligo_core::Queue;
use colligo_registry::{handle_registration, Report, UserRegistry};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{read_requests, RegistrationRequest};
use crate::output::{self, OutputFormat};

/// Arguments for the register command
#[derive(Debug, Clone, Args)]
pub struct RegisterArgs {
    /// Username for a single registration
    #[arg(
        short,
        long,
        requires_all = ["email", "password"],
        conflicts_with = "input"
    )]
    pub username: Option<String>,

    /// Email for a single registration
    #[arg(short, long, requires = "username")]
    pub email: Option<String>,

    /// Password for a single registration
    #[arg(short, long, requires = "username")]
    pub password: Option<String>,

    /// JSON file holding an array of {username, email, password} requests
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl RegisterArgs {
    /// Execute the register command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let mut registry = UserRegistry::with_config(config.validation.clone())
            .context("Invalid validation settings")?;

        let mut pending: Queue<RegistrationRequest> = self.requests()?.into_iter().collect();
        log::info!("Processing {} registration request(s)", pending.len());

        let reports = register_all(&mut registry, &mut pending);
        let rejected = reports.iter().filter(|report| !report.success).count();

        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = output::formatter(format, config.output.pretty_json, io::stdout());
        for report in &reports {
            formatter.write_report(report)?;
        }
        formatter.finish()?;

        log::info!(
            "Registered {} user(s), rejected {}",
            registry.len(),
            rejected
        );

        if rejected > 0 {
            return Err(CliError::RegistrationRejected {
                rejected,
                total: reports.len(),
            }
            .into());
        }

        Ok(())
    }

    fn requests(&self) -> Result<Vec<RegistrationRequest>> {
        if let Some(path) = &self.input {
            return read_requests(path);
        }

        match (&self.username, &self.email, &self.password) {
            (Some(username), Some(email), Some(password)) => Ok(vec![RegistrationRequest {
                username: username.clone(),
                email: email.clone(),
                password: password.clone(),
            }]),
            _ => Err(CliError::MissingInput.into()),
        }
    }
}

/// Drain `pending` in arrival order against one registry
pub fn register_all(
    registry: &mut UserRegistry,
    pending: &mut Queue<RegistrationRequest>,
) -> Vec<Report> {
    let mut reports = Vec::with_capacity(pending.len());
    while let Ok(request) = pending.dequeue() {
        log::debug!("Registering '{}'", request.username);
        reports.push(handle_registration(
            registry,
            &request.username,
            &request.email,
            &request.password,
        ));
    }
    reports
}
