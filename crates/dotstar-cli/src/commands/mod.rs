use std::process::ExitCode;

use crate::commands::{check::CheckArgs, explain::ExplainArgs, grep::GrepArgs};

pub mod check;
pub mod explain;
pub mod grep;

/// Subcommands for dotstar
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the lines of the input that match a pattern.
    Grep(GrepArgs),

    /// Match a single text; exit status 0 on a match, 1 otherwise.
    Check(CheckArgs),

    /// Show how a pattern is interpreted.
    Explain(ExplainArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<ExitCode, Box<dyn std::error::Error>> {
        match self {
            Commands::Grep(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
        }
    }
}
