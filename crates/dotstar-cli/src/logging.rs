use stderrlog::{LogLevelNum, Timestamp};

/// Logging flags shared by every dotstar subcommand.
///
/// Logs go to stderr, so they never mix with matched lines on stdout.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Suppress all log output, including budget warnings.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise log verbosity; repeat for more (-v errors .. -vvvvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Prefix log lines with a timestamp.
    #[clap(short, long)]
    pub ts: bool,
}

/// Map a `-v` count onto a `stderrlog` level.
fn level_num(level: u8) -> LogLevelNum {
    match level {
        0 => LogLevelNum::Off,
        1 => LogLevelNum::Error,
        2 => LogLevelNum::Warn,
        3 => LogLevelNum::Info,
        4 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

impl LogArgs {
    /// The `-v` count, or `default` when no `-v` was given.
    pub fn level(
        &self,
        default: u8,
    ) -> u8 {
        match self.verbose {
            Some(verbose) if verbose > 0 => verbose,
            _ => default,
        }
    }

    /// Install the stderr logger.
    ///
    /// Subcommands pass `2`, so skipped lines are reported by default.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let timestamp = if self.ts {
            Timestamp::Second
        } else {
            Timestamp::Off
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(level_num(self.level(default)))
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}
