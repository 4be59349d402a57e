//! quizpack command-line entry point

use anyhow::Result;
use clap::Parser;
use quizpack_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "quizpack", version, about = "Draw questions from a plain-text question pack")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    quizpack_cli::init_logging(cli.verbose, cli.quiet);
    cli.command.execute()
}
