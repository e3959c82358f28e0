//! Colligo command-line entry point

use anyhow::Result;
use clap::Parser;
use colligo_cli::commands::Commands;

/// Registration validation and numeric aggregates built on Colligo's
/// generic collections and error taxonomy
#[derive(Debug, Parser)]
#[command(name = "colligo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    colligo_cli::init_logging(cli.verbose, cli.quiet);

    log::debug!("Arguments: {:?}", cli);
    cli.command.execute()
}
