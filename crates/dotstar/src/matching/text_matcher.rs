//! # Text Matcher Trait

use crate::alloc::sync::Arc;
use crate::alloc::vec::Vec;
use crate::errors::DSResult;
use crate::pattern::Pattern;

/// Common Text Matcher Handle Type
pub type TextMatcherHandle = Arc<dyn TextMatcher>;

/// A configured matcher bound to one [`Pattern`].
///
/// Implementations are shared across threads; every call is independent.
pub trait TextMatcher: Send + Sync {
    /// Get the bound pattern.
    fn pattern(&self) -> &Pattern;

    /// Does `text` match the pattern?
    ///
    /// ## Returns
    /// `Ok(bool)` with the match result; `Err` only if a configured
    /// budget ran out before an answer was found.
    fn try_is_match(
        &self,
        text: &str,
    ) -> DSResult<bool>;

    /// Match each text in a batch.
    ///
    /// ## Arguments
    /// * `batch` - A slice of texts.
    ///
    /// ## Returns
    /// One result per text, in order.
    fn try_match_batch(
        &self,
        batch: &[&str],
    ) -> Vec<DSResult<bool>> {
        batch.iter().map(|text| self.try_is_match(text)).collect()
    }

    /// Find the indices of matching texts in a batch.
    ///
    /// Fails on the first text whose budget runs out.
    fn try_filter(
        &self,
        batch: &[&str],
    ) -> DSResult<Vec<usize>> {
        let mut hits = Vec::new();
        for (idx, result) in self.try_match_batch(batch).into_iter().enumerate() {
            if result? {
                hits.push(idx);
            }
        }
        Ok(hits)
    }
}

impl core::fmt::Debug for dyn TextMatcher {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "TextMatcher({})", self.pattern())
    }
}

impl TextMatcher for Pattern {
    fn pattern(&self) -> &Pattern {
        self
    }

    fn try_is_match(
        &self,
        text: &str,
    ) -> DSResult<bool> {
        Ok(self.is_match(text))
    }
}

impl<M: TextMatcher + ?Sized> TextMatcher for Arc<M> {
    fn pattern(&self) -> &Pattern {
        (**self).pattern()
    }

    fn try_is_match(
        &self,
        text: &str,
    ) -> DSResult<bool> {
        (**self).try_is_match(text)
    }

    fn try_match_batch(
        &self,
        batch: &[&str],
    ) -> Vec<DSResult<bool>> {
        (**self).try_match_batch(batch)
    }
}
