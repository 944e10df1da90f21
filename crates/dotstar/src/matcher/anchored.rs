//! # Anchored Matching
//!
//! The backtracking core. Patterns are walked as `&[char]`; text is walked
//! as `&str` suffixes, one `char` at a time. Neither is copied.

use crate::matcher::guards::MatchGuard;
use crate::pattern::{END_ANCHOR, STAR, WILDCARD};

/// Does the pattern char `p` match the text char `c`?
#[inline]
fn atom_matches(
    p: char,
    c: char,
) -> bool {
    p == WILDCARD || p == c
}

/// Split the first char off `text`, if it matches `p`.
#[inline]
fn consume(
    p: char,
    text: &str,
) -> Option<&str> {
    match text.chars().next() {
        Some(c) if atom_matches(p, c) => Some(&text[c.len_utf8()..]),
        _ => None,
    }
}

/// Does all of `pattern` match some prefix of `text`?
///
/// Cases, first match wins:
/// 1. empty pattern: match.
/// 2. `c*...`: hand off to [`match_star`].
/// 3. lone trailing `$`: match iff `text` is empty.
/// 4. first char matches: advance both.
/// 5. otherwise: no match.
pub(crate) fn match_here<G: MatchGuard>(
    mut pattern: &[char],
    mut text: &str,
    guard: &mut G,
) -> Result<bool, G::Error> {
    // Case 4 loops rather than recursing; each pass drops one pattern char.
    loop {
        match pattern {
            [] => return Ok(true),
            [c, STAR, rest @ ..] => return match_star(*c, rest, text, guard),
            [END_ANCHOR] => return Ok(text.is_empty()),
            [c, rest @ ..] => match consume(*c, text) {
                Some(tail) => {
                    pattern = rest;
                    text = tail;
                }
                None => return Ok(false),
            },
        }
    }
}

/// Match `c*` followed by `pattern` at the start of `text`.
///
/// Shortest first: zero repetitions, then one more `c` per retry,
/// until the text runs out or stops matching `c`.
pub(crate) fn match_star<G: MatchGuard>(
    c: char,
    pattern: &[char],
    mut text: &str,
    guard: &mut G,
) -> Result<bool, G::Error> {
    loop {
        guard.check()?;

        if match_here(pattern, text, guard)? {
            return Ok(true);
        }

        match consume(c, text) {
            Some(tail) => text = tail,
            None => return Ok(false),
        }
    }
}
