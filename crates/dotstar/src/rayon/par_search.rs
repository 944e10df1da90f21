//! # Parallel Offset Search
//!
//! Each unanchored offset attempt is independent of the others, so a long
//! text can be searched with one task per offset. The result is the same
//! as the sequential search: the lowest matching offset wins.

use crate::alloc::vec::Vec;
use crate::matcher::guards::into_ok;
use crate::matcher::{Unbounded, match_here, split_start_anchor, suffixes};
use crate::pattern::Pattern;
use rayon::prelude::*;

/// Parallel [`crate::matcher::find`].
///
/// ## Returns
/// The lowest char offset with a successful anchored attempt, or `None`.
pub fn par_find(
    pattern: &Pattern,
    text: &str,
) -> Option<usize> {
    let (anchored, chars) = split_start_anchor(pattern.chars());

    if anchored {
        return into_ok(match_here(chars, text, &mut Unbounded)).then_some(0);
    }

    let starts: Vec<&str> = suffixes(text).collect();
    starts
        .par_iter()
        .position_first(|suffix| into_ok(match_here(chars, suffix, &mut Unbounded)))
}

/// Parallel [`crate::matcher::is_match`].
pub fn par_is_match(
    pattern: &Pattern,
    text: &str,
) -> bool {
    par_find(pattern, text).is_some()
}
