use std::{io::Write, process::ExitCode};

use dotstar::{Pattern, validation::pattern_problems};

use crate::logging::LogArgs;

/// Args for the explain command.
#[derive(clap::Args, Debug)]
pub struct ExplainArgs {
    /// The pattern to explain.
    pub pattern: String,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl ExplainArgs {
    /// Run the explain command.
    pub fn run(&self) -> Result<ExitCode, Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let mut out = std::io::stdout().lock();
        explain(&Pattern::new(&self.pattern), &mut out)?;
        out.flush()?;

        Ok(ExitCode::SUCCESS)
    }
}

fn explain(
    pattern: &Pattern,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(out, "pattern: {pattern}")?;
    writeln!(out, "debug:   {pattern:?}")?;
    writeln!(
        out,
        "anchors: start={} end={}",
        pattern.is_anchored_start(),
        pattern.is_anchored_end()
    )?;

    writeln!(out, "tokens:")?;
    for (pos, token) in pattern.tokens() {
        writeln!(out, "  {pos:>3}  {token}")?;
    }

    let problems = pattern_problems(pattern);
    if !problems.is_empty() {
        writeln!(out, "strict mode would reject:")?;
        for problem in problems {
            writeln!(out, "  {problem}")?;
        }
    }
    Ok(())
}
