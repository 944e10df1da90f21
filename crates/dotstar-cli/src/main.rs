mod commands;
mod input_output;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use commands::Commands;

/// dotstar: match lines against `^ $ . *` patterns.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
