//! # Error Types
//!
//! Plain matching never fails; absence of a match is `false`, not an error.
//! These errors only surface from bounded matching and strict validation.

/// Errors from dotstar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DotstarError {
    /// A bounded match ran past its wall-clock deadline.
    #[cfg(feature = "std")]
    #[error("match timed out after {elapsed:?}")]
    TimedOut {
        /// Time spent before the deadline check fired.
        elapsed: std::time::Duration,
    },

    /// A bounded match used up its step budget.
    #[error("match exceeded step limit ({limit})")]
    StepLimitExceeded {
        /// The configured step limit.
        limit: usize,
    },

    /// Strict mode: a `*` with no preceding atom.
    #[error("dangling '*' at position {position}")]
    DanglingStar {
        /// Char offset of the `*` in the pattern.
        position: usize,
    },

    /// Strict mode: an anchor character that will be matched as a literal.
    #[error("anchor '{anchor}' at position {position} is matched literally")]
    MisplacedAnchor {
        /// The anchor character, `^` or `$`.
        anchor: char,

        /// Char offset of the anchor in the pattern.
        position: usize,
    },
}

impl DotstarError {
    /// Is this a budget error (timeout or step limit)?
    ///
    /// Budget errors mean "no answer", as opposed to "no match".
    pub fn is_budget_exhausted(&self) -> bool {
        match self {
            #[cfg(feature = "std")]
            Self::TimedOut { .. } => true,
            Self::StepLimitExceeded { .. } => true,
            _ => false,
        }
    }
}

/// Result type for dotstar operations.
pub type DSResult<T> = core::result::Result<T, DotstarError>;
