//! mdsolo CLI - Command-line interface for Solo Mode data conversion

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "mdsolo")]
#[command(about = "mdsolo: Solo Mode data tools for Master Duel", long_about = None)]
struct Cli {
    /// Suppress progress output, showing warnings and errors only
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Run the mdsolo CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    cli.command.execute()?;

    Ok(())
}
