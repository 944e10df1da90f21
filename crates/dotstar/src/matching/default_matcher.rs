//! # Default Text Matcher

use crate::errors::DSResult;
use crate::matcher::try_is_match_with;
use crate::matching::{MatcherOptions, TextMatcher};
use crate::pattern::Pattern;

/// A [`Pattern`] bound to [`MatcherOptions`].
///
/// Unbounded options take the plain [`Pattern::is_match`] path; otherwise
/// each call gets a fresh [`crate::matcher::MatchBudget`].
#[derive(Debug, Clone)]
pub struct DefaultTextMatcher {
    pattern: Pattern,
    options: MatcherOptions,
}

impl DefaultTextMatcher {
    /// Create a new matcher.
    ///
    /// Strict validation is applied by [`MatcherOptions::build`], not here.
    ///
    /// ## Arguments
    /// * `pattern` - The pattern to match.
    /// * `options` - The matcher options.
    pub fn new<P>(
        pattern: P,
        options: MatcherOptions,
    ) -> Self
    where
        P: Into<Pattern>,
    {
        Self {
            pattern: pattern.into(),
            options,
        }
    }

    /// Get the matcher options.
    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }
}

impl TextMatcher for DefaultTextMatcher {
    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text))
    )]
    fn try_is_match(
        &self,
        text: &str,
    ) -> DSResult<bool> {
        if !self.options.is_bounded() {
            return Ok(self.pattern.is_match(text));
        }

        let mut budget = self.options.budget();
        try_is_match_with(&self.pattern, text, &mut budget).inspect_err(|err| {
            log::warn!(
                "{} gave up after {} steps on {} chars of text: {err}",
                self.pattern,
                budget.steps(),
                text.chars().count()
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::string::String;
    use crate::alloc::vec;
    use crate::errors::DotstarError;

    fn pathological_text() -> String {
        "a".repeat(40)
    }

    #[test]
    fn test_unbounded() {
        let matcher = DefaultTextMatcher::new("^a.c$", MatcherOptions::default());
        assert_eq!(matcher.try_is_match("abc"), Ok(true));
        assert_eq!(matcher.try_is_match("ac"), Ok(false));
        assert_eq!(matcher.try_is_match("abbc"), Ok(false));
        assert_eq!(matcher.options(), &MatcherOptions::default());
    }

    #[test]
    fn test_bounded_answers_easy_questions() {
        let options = MatcherOptions::default().with_max_steps(10_000usize);
        let matcher = DefaultTextMatcher::new("b.*d", options);
        assert_eq!(matcher.try_is_match("xxabcdxx"), Ok(true));
        assert_eq!(matcher.try_is_match("xxabcxx"), Ok(false));
    }

    #[test]
    fn test_step_limit_is_distinct_from_no_match() {
        let options = MatcherOptions::default().with_max_steps(500usize);
        let matcher = DefaultTextMatcher::new("a*a*a*a*a*a*b", options);
        let text = pathological_text();

        assert_eq!(
            matcher.try_is_match(&text),
            Err(DotstarError::StepLimitExceeded { limit: 500 })
        );

        // A fresh budget per call: an easy text still succeeds afterwards.
        assert_eq!(matcher.try_is_match("aab"), Ok(true));
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_deadline() {
        use std::time::Duration;

        let options = MatcherOptions::default().with_deadline(Duration::ZERO);
        let matcher = DefaultTextMatcher::new("a*a*a*a*a*a*b", options);
        match matcher.try_is_match(&pathological_text()) {
            Err(DotstarError::TimedOut { .. }) => (),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_batch_with_budget() {
        let options = MatcherOptions::default().with_max_steps(500usize);
        let matcher = DefaultTextMatcher::new("a*a*a*a*a*a*b", options);
        let text = pathological_text();

        let results = matcher.try_match_batch(&["ab", text.as_str(), "c"]);
        assert_eq!(results[0], Ok(true));
        assert!(results[1].as_ref().unwrap_err().is_budget_exhausted());
        assert_eq!(results[2], Ok(false));

        assert!(matcher.try_filter(&["ab", text.as_str()]).is_err());
        assert_eq!(matcher.try_filter(&["ab", "c", "b"]), Ok(vec![0, 2]));
    }
}
