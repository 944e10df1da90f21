//! # Match Guards
//!
//! A [`MatchGuard`] is consulted once per offset attempt and once per
//! star retry. It is the only place a match can be cut short.

use crate::errors::{DSResult, DotstarError};
use core::convert::Infallible;

/// Hook for bounding the work done by a single match call.
pub trait MatchGuard {
    /// The error produced when the guard trips.
    type Error;

    /// Record one unit of work; fail to abort the match.
    fn check(&mut self) -> Result<(), Self::Error>;
}

/// A guard that never trips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl MatchGuard for Unbounded {
    type Error = Infallible;

    #[inline(always)]
    fn check(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Unwrap a result whose error type cannot be constructed.
pub(crate) fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Step and deadline budget for one match call.
///
/// A budget is single-use: build a fresh one per call.
#[derive(Debug, Clone)]
pub struct MatchBudget {
    steps: usize,
    max_steps: Option<usize>,

    #[cfg(feature = "std")]
    deadline: Option<(std::time::Instant, std::time::Duration)>,
}

impl Default for MatchBudget {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl MatchBudget {
    /// A budget with no limits.
    pub fn unlimited() -> Self {
        Self {
            steps: 0,
            max_steps: None,
            #[cfg(feature = "std")]
            deadline: None,
        }
    }

    /// Limit the number of guard checks.
    ///
    /// ## Arguments
    /// * `max_steps` - The step limit; `None` for no limit.
    pub fn with_max_steps(
        mut self,
        max_steps: Option<usize>,
    ) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Limit wall-clock time, measured from now.
    ///
    /// ## Arguments
    /// * `timeout` - The time limit; `None` for no limit.
    #[cfg(feature = "std")]
    pub fn with_deadline(
        mut self,
        timeout: Option<std::time::Duration>,
    ) -> Self {
        self.deadline = timeout.map(|t| (std::time::Instant::now(), t));
        self
    }

    /// The number of steps recorded so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Is any limit configured?
    pub fn is_bounded(&self) -> bool {
        cfg_if::cfg_if! {
            if #[cfg(feature = "std")] {
                self.max_steps.is_some() || self.deadline.is_some()
            } else {
                self.max_steps.is_some()
            }
        }
    }
}

impl MatchGuard for MatchBudget {
    type Error = DotstarError;

    fn check(&mut self) -> DSResult<()> {
        self.steps += 1;

        if let Some(limit) = self.max_steps
            && self.steps > limit
        {
            return Err(DotstarError::StepLimitExceeded { limit });
        }

        #[cfg(feature = "std")]
        if let Some((start, timeout)) = self.deadline {
            let elapsed = start.elapsed();
            if elapsed >= timeout {
                return Err(DotstarError::TimedOut { elapsed });
            }
        }

        Ok(())
    }
}
