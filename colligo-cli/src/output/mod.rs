//! Output formatting module

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use colligo_registry::Report;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single report
    fn write_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per report, failures followed by their messages
    #[default]
    Text,
    /// A JSON array of reports
    Json,
}

/// Build the formatter for `format` over `writer`
pub fn formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    pretty_json: bool,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
    }
}
