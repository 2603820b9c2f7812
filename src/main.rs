//! Command-line entry point.
//!
//! Parses arguments, initializes logging and dispatches to the command
//! handlers in [`cli`]. Logs go to stderr; the run summary goes to stdout.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // summary output is the program's contract

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    fraudprep::logging::init()?;

    let cli = cli::Cli::parse();
    cli::run_command(cli.command)
}
