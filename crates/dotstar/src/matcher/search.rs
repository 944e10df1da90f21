//! # Search and Anchor Dispatch

use crate::matcher::anchored::match_here;
use crate::matcher::guards::{MatchGuard, Unbounded, into_ok};
use crate::pattern::{Pattern, START_ANCHOR};
use core::iter;

/// Iterate the suffixes of `text` an unanchored search tries.
///
/// The `n`th suffix starts at char offset `n`. The empty suffix is only
/// produced for empty text; a non-empty text never gets an attempt at
/// its end offset, so `"$"` does not match `"a"`.
pub(crate) fn suffixes(text: &str) -> impl Iterator<Item = &str> {
    let empty = text.is_empty().then_some(text);
    text.char_indices()
        .map(move |(idx, _)| &text[idx..])
        .chain(empty)
}

/// The suffix of `text` starting at char offset `offset`.
///
/// Offset `len(text)` yields `""`; anything past that is `None`.
pub(crate) fn suffix_at(
    text: &str,
    offset: usize,
) -> Option<&str> {
    text.char_indices()
        .map(|(idx, _)| idx)
        .chain(iter::once(text.len()))
        .nth(offset)
        .map(|idx| &text[idx..])
}

/// Split a leading `^` off the pattern chars.
///
/// ## Returns
/// `(anchored, rest)`.
pub(crate) fn split_start_anchor(chars: &[char]) -> (bool, &[char]) {
    match chars {
        [START_ANCHOR, rest @ ..] => (true, rest),
        _ => (false, chars),
    }
}

/// Does `text` match (or contain a match of) `pattern`?
///
/// A `^`-anchored pattern gets one attempt at offset 0; otherwise
/// every char offset is tried, in order, until one matches.
/// Empty text gets exactly one attempt, against the empty suffix.
///
/// ## Arguments
/// * `pattern` - The pattern.
/// * `text` - The text to search.
pub fn is_match(
    pattern: &Pattern,
    text: &str,
) -> bool {
    find(pattern, text).is_some()
}

/// Find the first char offset at which `pattern` matches.
///
/// ## Returns
/// `Some(offset)` of the first successful anchored attempt, or `None`.
pub fn find(
    pattern: &Pattern,
    text: &str,
) -> Option<usize> {
    into_ok(try_find_with(pattern, text, &mut Unbounded))
}

/// Make a single anchored attempt at char offset `offset`.
///
/// A `^`-anchored pattern can only match at offset `0`. Unlike the
/// search, offset `len(text)` is a valid attempt; offsets past it never match.
pub fn is_match_at(
    pattern: &Pattern,
    text: &str,
    offset: usize,
) -> bool {
    into_ok(try_is_match_at_with(pattern, text, offset, &mut Unbounded))
}

/// Guarded [`is_match`].
///
/// ## Arguments
/// * `pattern` - The pattern.
/// * `text` - The text to search.
/// * `guard` - Checked once per offset attempt and once per star retry.
///
/// ## Returns
/// The match result, or the guard's error if it tripped.
pub fn try_is_match_with<G: MatchGuard>(
    pattern: &Pattern,
    text: &str,
    guard: &mut G,
) -> Result<bool, G::Error> {
    Ok(try_find_with(pattern, text, guard)?.is_some())
}

/// Guarded [`find`].
pub fn try_find_with<G: MatchGuard>(
    pattern: &Pattern,
    text: &str,
    guard: &mut G,
) -> Result<Option<usize>, G::Error> {
    let (anchored, chars) = split_start_anchor(pattern.chars());

    if anchored {
        guard.check()?;
        return Ok(match_here(chars, text, guard)?.then_some(0));
    }

    for (offset, suffix) in suffixes(text).enumerate() {
        guard.check()?;
        if match_here(chars, suffix, guard)? {
            return Ok(Some(offset));
        }
    }
    Ok(None)
}

/// Guarded [`is_match_at`].
pub fn try_is_match_at_with<G: MatchGuard>(
    pattern: &Pattern,
    text: &str,
    offset: usize,
    guard: &mut G,
) -> Result<bool, G::Error> {
    let (anchored, chars) = split_start_anchor(pattern.chars());
    if anchored && offset != 0 {
        return Ok(false);
    }

    match suffix_at(text, offset) {
        Some(suffix) => {
            guard.check()?;
            match_here(chars, suffix, guard)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;
    use crate::alloc::vec::Vec;
    use crate::errors::DotstarError;
    use crate::matcher::guards::MatchBudget;

    fn m(
        pattern: &str,
        text: &str,
    ) -> bool {
        is_match(&Pattern::new(pattern), text)
    }

    #[test]
    fn test_suffixes() {
        let all: Vec<&str> = suffixes("a\u{e9}b").collect();
        assert_eq!(all, vec!["a\u{e9}b", "\u{e9}b", "b"]);

        let all: Vec<&str> = suffixes("").collect();
        assert_eq!(all, vec![""]);
    }

    #[test]
    fn test_suffix_at() {
        assert_eq!(suffix_at("a\u{e9}b", 0), Some("a\u{e9}b"));
        assert_eq!(suffix_at("a\u{e9}b", 2), Some("b"));
        assert_eq!(suffix_at("a\u{e9}b", 3), Some(""));
        assert_eq!(suffix_at("a\u{e9}b", 4), None);
        assert_eq!(suffix_at("", 0), Some(""));
    }

    #[test]
    fn test_empty_and_bare_anchor_match_everything() {
        for text in ["", "a", "hello world", "\u{1f600}"] {
            assert!(m("", text), "{text:?}");
            assert!(m("^", text), "{text:?}");
        }
    }

    #[test]
    fn test_end_anchor_only() {
        assert!(m("$", ""));
        assert!(!m("$", "a"));
        assert!(!m("^$", "a"));
        assert!(m("a$", "ba"));

        // Patterns that can only match the empty end of a non-empty
        // text never get that attempt.
        assert!(!m("x*$", "ab"));
        assert!(m("x*$", ""));
    }

    #[test]
    fn test_star_examples() {
        assert!(m("a*", ""));
        assert!(m("a*", "aaa"));
        assert!(m("a*", "b"));
        assert!(!m("^a*$", "b"));
        assert!(m("^a*$", "aaaa"));
    }

    #[test]
    fn test_anchored_wildcard() {
        assert!(m("^a.c$", "abc"));
        assert!(!m("^a.c$", "ac"));
        assert!(!m("^a.c$", "abbc"));
    }

    #[test]
    fn test_unsupported_operators_are_literal() {
        assert!(!m("colou?r", "color"));
        assert!(!m("colou?r", "colour"));
        assert!(m("colou?r", "colou?r"));
        assert!(m("a+", "xa+y"));
        assert!(!m("a+", "aa"));
    }

    #[test]
    fn test_unanchored_search() {
        let pattern = Pattern::new("b.*d");
        assert!(is_match(&pattern, "xxabcdxx"));
        assert_eq!(find(&pattern, "xxabcdxx"), Some(3));
        assert_eq!(find(&pattern, "xxxx"), None);
        assert_eq!(find(&Pattern::new("x$"), "xaxx"), Some(3));
        assert_eq!(find(&Pattern::new("^x"), "xaxx"), Some(0));
        assert_eq!(find(&Pattern::new(""), "abc"), Some(0));
    }

    #[test]
    fn test_find_counts_chars_not_bytes() {
        assert_eq!(find(&Pattern::new("z"), "\u{e9}\u{e9}z"), Some(2));
    }

    #[test]
    fn test_is_match_at() {
        let pattern = Pattern::new("bc");
        assert!(!is_match_at(&pattern, "abcd", 0));
        assert!(is_match_at(&pattern, "abcd", 1));
        assert!(!is_match_at(&pattern, "abcd", 2));
        assert!(!is_match_at(&pattern, "abcd", 99));

        assert!(is_match_at(&Pattern::new("$"), "abcd", 4));
        assert!(!is_match_at(&Pattern::new("$"), "abcd", 5));

        let anchored = Pattern::new("^bc");
        assert!(!is_match_at(&anchored, "bcbc", 2));
        assert!(is_match_at(&anchored, "bcbc", 0));
    }

    #[test]
    fn test_idempotent_and_non_mutating() {
        let pattern = Pattern::new("^h.l*o");
        let text = "hello";
        let first = is_match(&pattern, text);
        for _ in 0..10 {
            assert_eq!(is_match(&pattern, text), first);
        }
        assert_eq!(pattern.as_str(), "^h.l*o");
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_guarded_search() {
        let pattern = Pattern::new("a*a*a*a*a*b");
        let text = "aaaaaaaaaaaaaaaaaaaaaaaaa";

        let mut budget = MatchBudget::unlimited().with_max_steps(Some(1_000));
        assert_eq!(
            try_is_match_with(&pattern, text, &mut budget),
            Err(DotstarError::StepLimitExceeded { limit: 1_000 })
        );

        let mut budget = MatchBudget::unlimited().with_max_steps(Some(1_000));
        assert_eq!(try_is_match_with(&pattern, "ab", &mut budget), Ok(true));
    }

    #[test]
    fn test_guard_counts_offset_attempts() {
        // No stars: one step per offset tried.
        let mut budget = MatchBudget::unlimited();
        assert!(!try_is_match_with(&Pattern::new("z"), "abc", &mut budget).unwrap());
        assert_eq!(budget.steps(), 3);

        let mut budget = MatchBudget::unlimited();
        assert!(!try_is_match_with(&Pattern::new("^z"), "abc", &mut budget).unwrap());
        assert_eq!(budget.steps(), 1);
    }
}
