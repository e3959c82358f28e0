//! Aggregate command implementation

use std::error::Error as StdError;
use std::fmt::Display;
use std::io;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colligo_core::{checked_sum, contains, filter, max, Numeric};
use colligo_registry::dispatch::report;
use colligo_registry::{RegistryError, Report};

use crate::error::CliError;
use crate::output::{self, OutputFormat};

/// Numeric type used to parse values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NumberKind {
    /// 64-bit signed integers
    Int,
    /// 64-bit floating point
    Float,
}

/// Arguments for the aggregate command
#[derive(Debug, Clone, Args)]
pub struct AggregateArgs {
    /// Numbers to aggregate
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// How values are parsed
    #[arg(short, long, value_enum, default_value = "int")]
    pub kind: NumberKind,

    /// Ignore values below this threshold
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Also report whether this value occurs
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub contains: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl AggregateArgs {
    /// Execute the aggregate command
    pub fn execute(&self) -> Result<()> {
        let reports = match self.kind {
            NumberKind::Int => self.reports::<i64>()?,
            NumberKind::Float => self.reports::<f64>()?,
        };

        let mut formatter = output::formatter(self.format, true, io::stdout());
        for report in &reports {
            formatter.write_report(report)?;
        }
        formatter.finish()?;

        let failed = reports.iter().filter(|report| !report.success).count();
        if failed > 0 {
            return Err(CliError::AggregateFailed(failed).into());
        }
        Ok(())
    }

    /// Parse the values as `T` and compute every requested aggregate
    pub fn reports<T>(&self) -> Result<Vec<Report>>
    where
        T: Numeric + FromStr + Display,
        T::Err: StdError + Send + Sync + 'static,
    {
        let mut numbers = self
            .values
            .iter()
            .map(|value| parse::<T>(value))
            .collect::<Result<Vec<_>>>()?;

        if let Some(threshold) = &self.min {
            let threshold = parse::<T>(threshold)?;
            numbers = filter(&numbers, |n| *n >= threshold);
        }
        log::debug!("Aggregating {} value(s)", numbers.len());

        let mut reports = vec![
            Report::success("count", numbers.len().to_string()),
            report(
                "sum",
                checked_sum(&numbers).map_err(RegistryError::from),
                |total| total.to_string(),
            ),
            report(
                "max",
                max(&numbers).map_err(RegistryError::from),
                |largest| largest.to_string(),
            ),
        ];

        if let Some(target) = &self.contains {
            let target = parse::<T>(target)?;
            reports.push(Report::success(
                format!("contains {target}"),
                contains(&numbers, &target).to_string(),
            ));
        }

        Ok(reports)
    }
}

fn parse<T>(value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    value
        .trim()
        .parse::<T>()
        .with_context(|| format!("Invalid number: '{value}'"))
}
