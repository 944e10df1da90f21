//! # Parallel Matcher

use crate::errors::DSResult;
use crate::matching::TextMatcher;
use crate::pattern::Pattern;

/// Batch-Level Parallel Matcher Wrapper.
///
/// Enables ``rayon`` matching of batches; single calls go straight
/// to the inner matcher.
#[derive(Debug, Clone)]
pub struct ParallelRayonMatcher<M: TextMatcher> {
    /// Wrapped matcher.
    pub inner: M,
}

impl<M: TextMatcher> ParallelRayonMatcher<M> {
    /// Create a new parallel matcher.
    ///
    /// ## Arguments
    /// * `inner` - The matcher to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonMatcher` instance.
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: TextMatcher> TextMatcher for ParallelRayonMatcher<M> {
    fn pattern(&self) -> &Pattern {
        self.inner.pattern()
    }

    fn try_is_match(
        &self,
        text: &str,
    ) -> DSResult<bool> {
        self.inner.try_is_match(text)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, batch))
    )]
    fn try_match_batch(
        &self,
        batch: &[&str],
    ) -> Vec<DSResult<bool>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.try_is_match(text))
            .collect()
    }
}
