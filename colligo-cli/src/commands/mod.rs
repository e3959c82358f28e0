//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod aggregate;
pub mod generate_config;
pub mod register;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register users and report every rejected field
    Register(register::RegisterArgs),

    /// Compute count, sum and maximum of a list of numbers
    Aggregate(aggregate::AggregateArgs),

    /// Write a configuration file with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Register(args) => args.execute(),
            Commands::Aggregate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let register_cmd = Commands::Register(register::RegisterArgs {
            username: Some("alice".to_string()),
            email: Some("alice@example.com".to_string()),
            password: Some("s3cretpass".to_string()),
            input: None,
            config: None,
            format: None,
        });

        let debug_str = format!("{:?}", register_cmd);
        assert!(debug_str.contains("Register"));
        assert!(debug_str.contains("alice"));

        let config_cmd = Commands::GenerateConfig(generate_config::GenerateConfigArgs {
            output: PathBuf::from("colligo.toml"),
            strict: false,
        });
        assert!(format!("{:?}", config_cmd).contains("colligo.toml"));
    }

    #[test]
    fn test_enum_variants_completeness() {
        let aggregate_cmd = Commands::Aggregate(aggregate::AggregateArgs {
            values: vec!["1".to_string()],
            kind: aggregate::NumberKind::Int,
            min: None,
            contains: None,
            format: crate::output::OutputFormat::Text,
        });

        match aggregate_cmd {
            Commands::Aggregate(_) => (),
            Commands::Register(_) | Commands::GenerateConfig(_) => panic!("Should be Aggregate"),
        }
    }
}
