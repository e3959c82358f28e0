//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use colligo_registry::ValidationConfig;
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Clone, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Start from the strict validation preset
    #[arg(long)]
    pub strict: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the thresholds under [validation]");
        println!("2. Use it for registration:");
        println!(
            "   colligo register --input users.json --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    pub fn generate_template(&self) -> Result<String> {
        let config = CliConfig {
            validation: if self.strict {
                ValidationConfig::strict()
            } else {
                ValidationConfig::default()
            },
            ..CliConfig::default()
        };

        let body = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
        Ok(format!(
            "# Colligo configuration\n#\n# Lengths are counted in characters.\n\n{body}"
        ))
    }
}
