//! # Strict Pattern Validation
//!
//! [`Pattern::new`] accepts any string, and anything the syntax can't
//! interpret is matched literally. These checks are opt-in, for callers
//! who would rather reject such patterns up front.
//!
//! Rejected:
//! * a `*` with no preceding atom (`"*a"`, `"a**"`, `"^*"`).
//! * a `^` anywhere but the first position.
//! * a `$` anywhere but the last position.

use crate::alloc::vec::Vec;
use crate::errors::{DSResult, DotstarError};
use crate::pattern::{Atom, END_ANCHOR, Pattern, PatternToken, STAR, START_ANCHOR};

/// Classify a literal-matched char that strict mode rejects.
fn literal_error(
    c: char,
    position: usize,
) -> Option<DotstarError> {
    match c {
        STAR => Some(DotstarError::DanglingStar { position }),
        START_ANCHOR | END_ANCHOR => Some(DotstarError::MisplacedAnchor {
            anchor: c,
            position,
        }),
        _ => None,
    }
}

/// Collect every strict-mode problem in `pattern`, in pattern order.
pub fn pattern_problems(pattern: &Pattern) -> Vec<DotstarError> {
    pattern
        .tokens()
        .filter_map(|(position, token)| match token {
            PatternToken::Atom(Atom::Literal(c)) | PatternToken::Star(Atom::Literal(c)) => {
                literal_error(c, position)
            }
            _ => None,
        })
        .collect()
}

/// Validate `pattern`, failing on the first strict-mode problem.
pub fn validate(pattern: &Pattern) -> DSResult<()> {
    match pattern_problems(pattern).into_iter().next() {
        Some(err) => {
            log::debug!("rejecting pattern {pattern}: {err}");
            Err(err)
        }
        None => Ok(()),
    }
}
