//! Text Matcher Options
//!
//! Options for building a [`TextMatcher`].

use crate::alloc::sync::Arc;
use crate::errors::DSResult;
use crate::matcher::MatchBudget;
use crate::matching::{DefaultTextMatcher, TextMatcher, TextMatcherHandle};
use crate::pattern::Pattern;

/// Options for configuring a [`TextMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatcherOptions {
    /// Wall-clock limit for a single match call.
    #[cfg(feature = "std")]
    pub deadline: Option<std::time::Duration>,

    /// Step limit for a single match call.
    ///
    /// One step is one offset attempt or one star retry.
    pub max_steps: Option<usize>,

    /// Should batch matching be threaded?
    pub parallel: bool,

    /// Should patterns be validated at build time?
    ///
    /// See [`crate::validation`].
    pub strict: bool,
}

impl MatcherOptions {
    /// Gets the configured deadline.
    #[cfg(feature = "std")]
    pub fn deadline(&self) -> Option<std::time::Duration> {
        self.deadline
    }

    /// Sets the configured deadline.
    #[cfg(feature = "std")]
    pub fn set_deadline<D>(
        &mut self,
        deadline: D,
    ) where
        D: Into<Option<std::time::Duration>>,
    {
        self.deadline = deadline.into();
    }

    /// Sets the configured deadline and returns the options.
    #[cfg(feature = "std")]
    pub fn with_deadline<D>(
        mut self,
        deadline: D,
    ) -> Self
    where
        D: Into<Option<std::time::Duration>>,
    {
        self.set_deadline(deadline);
        self
    }

    /// Gets the configured step limit.
    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }

    /// Sets the configured step limit.
    pub fn set_max_steps<S>(
        &mut self,
        max_steps: S,
    ) where
        S: Into<Option<usize>>,
    {
        self.max_steps = max_steps.into();
    }

    /// Sets the configured step limit and returns the options.
    pub fn with_max_steps<S>(
        mut self,
        max_steps: S,
    ) -> Self
    where
        S: Into<Option<usize>>,
    {
        self.set_max_steps(max_steps);
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value and returns the options.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Gets the configured strict value.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Sets the configured strict value.
    pub fn set_strict(
        &mut self,
        strict: bool,
    ) {
        self.strict = strict;
    }

    /// Sets the configured strict value and returns the options.
    pub fn with_strict(
        mut self,
        strict: bool,
    ) -> Self {
        self.set_strict(strict);
        self
    }

    /// Is any per-call limit configured?
    pub fn is_bounded(&self) -> bool {
        self.budget().is_bounded()
    }

    /// Start a fresh [`MatchBudget`] for one match call.
    ///
    /// Any deadline is measured from this call.
    pub fn budget(&self) -> MatchBudget {
        let budget = MatchBudget::unlimited().with_max_steps(self.max_steps);

        #[cfg(feature = "std")]
        let budget = budget.with_deadline(self.deadline);

        budget
    }

    /// Build a [`TextMatcher`] for the given pattern.
    ///
    /// ## Returns
    /// The matcher; or a validation error, in strict mode.
    pub fn build<P>(
        &self,
        pattern: P,
    ) -> DSResult<TextMatcherHandle>
    where
        P: Into<Pattern>,
    {
        let pattern = pattern.into();
        if self.strict {
            crate::validation::validate(&pattern)?;
        }

        let matcher = DefaultTextMatcher::new(pattern, *self);

        if self.parallel {
            cfg_if::cfg_if! {
                if #[cfg(feature = "rayon")] {
                    return Ok(Arc::new(crate::rayon::ParallelRayonMatcher::new(matcher)));
                } else {
                    log::debug!("parallel matching requested without the \"rayon\" feature; building a sequential matcher");
                }
            }
        }

        let handle: Arc<dyn TextMatcher> = Arc::new(matcher);
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DotstarError;

    #[test]
    fn test_defaults() {
        let options = MatcherOptions::default();
        assert_eq!(options.max_steps(), None);
        assert!(!options.parallel());
        assert!(!options.strict());
        assert!(!options.is_bounded());

        #[cfg(feature = "std")]
        assert_eq!(options.deadline(), None);
    }

    #[test]
    fn test_builders() {
        let options = MatcherOptions::default()
            .with_max_steps(100usize)
            .with_parallel(true)
            .with_strict(true);
        assert_eq!(options.max_steps(), Some(100));
        assert!(options.parallel());
        assert!(options.strict());
        assert!(options.is_bounded());

        let options = options.with_max_steps(None);
        assert_eq!(options.max_steps(), None);
        assert!(!options.is_bounded());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_deadline_builders() {
        use std::time::Duration;

        let mut options = MatcherOptions::default().with_deadline(Duration::from_millis(10));
        assert_eq!(options.deadline(), Some(Duration::from_millis(10)));
        assert!(options.is_bounded());

        options.set_deadline(None);
        assert!(!options.is_bounded());
    }

    #[test]
    fn test_build() {
        let matcher = MatcherOptions::default().build("^a*b").unwrap();
        assert_eq!(matcher.pattern().as_str(), "^a*b");
        assert_eq!(matcher.try_is_match("aab"), Ok(true));
        assert_eq!(matcher.try_is_match("xab"), Ok(false));
    }

    #[test]
    fn test_build_strict() {
        let options = MatcherOptions::default().with_strict(true);
        assert_eq!(
            options.build("a**").unwrap_err(),
            DotstarError::DanglingStar { position: 2 }
        );
        assert!(options.build("a*").is_ok());

        // Non-strict accepts anything.
        assert!(MatcherOptions::default().build("a**").is_ok());
    }

    #[test]
    fn test_build_parallel() {
        let matcher = MatcherOptions::default()
            .with_parallel(true)
            .build("b.*d")
            .unwrap();
        assert_eq!(matcher.try_filter(&["abcd", "bd", "db"]), Ok(crate::alloc::vec![0, 1]));
    }
}
