use std::{process::ExitCode, time::Duration};

use dotstar::{DSResult, MatcherOptions, Pattern, matcher::try_find_with, validation::validate};

use crate::logging::LogArgs;

/// Args for the check command.
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// The pattern to match.
    pub pattern: String,

    /// The text to match against.
    pub text: String,

    /// Wall-clock limit, in milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Step limit.
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Reject patterns containing a literal `*`, `^` or `$`.
    #[clap(long)]
    pub strict: bool,

    #[clap(flatten)]
    pub logging: LogArgs,
}

/// What a single check concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Matched, starting at this char offset.
    Match(usize),

    /// No offset matched.
    NoMatch,

    /// The budget ran out first; no answer.
    GaveUp,
}

impl Outcome {
    /// The word printed for this outcome.
    fn verdict(&self) -> &'static str {
        match self {
            Outcome::Match(_) => "match",
            Outcome::NoMatch => "no match",
            Outcome::GaveUp => "gave up",
        }
    }

    /// Process exit status: 0 match, 1 no match, 2 gave up.
    fn status(&self) -> u8 {
        match self {
            Outcome::Match(_) => 0,
            Outcome::NoMatch => 1,
            Outcome::GaveUp => 2,
        }
    }
}

impl CheckArgs {
    /// The matcher configuration selected by the flags.
    pub fn matcher_options(&self) -> MatcherOptions {
        MatcherOptions::default()
            .with_deadline(self.timeout_ms.map(Duration::from_millis))
            .with_max_steps(self.max_steps)
            .with_strict(self.strict)
    }

    /// Run the check command.
    pub fn run(&self) -> Result<ExitCode, Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let outcome = check(
            &Pattern::new(&self.pattern),
            &self.text,
            &self.matcher_options(),
        )?;
        if let Outcome::Match(offset) = outcome {
            log::info!("first match at char offset {offset}");
        }

        println!("{}", outcome.verdict());
        Ok(ExitCode::from(outcome.status()))
    }
}

/// Search `text` once, under the budget `options` describe.
fn check(
    pattern: &Pattern,
    text: &str,
    options: &MatcherOptions,
) -> DSResult<Outcome> {
    if options.strict() {
        validate(pattern)?;
    }

    match try_find_with(pattern, text, &mut options.budget()) {
        Ok(Some(offset)) => Ok(Outcome::Match(offset)),
        Ok(None) => Ok(Outcome::NoMatch),
        Err(err) if err.is_budget_exhausted() => {
            log::warn!("{pattern}: {err}");
            Ok(Outcome::GaveUp)
        }
        Err(err) => Err(err),
    }
}
