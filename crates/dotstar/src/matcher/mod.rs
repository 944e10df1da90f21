//! # Matcher
//!
//! Stateless recursive backtracking over a pattern's chars and a text's chars.
//!
//! * [`is_match`] - the main entry point.
//! * [`find`] - like [`is_match`], but reports the char offset the match started at.
//! * [`is_match_at`] - a single anchored attempt at a given char offset.
//!
//! Each has a `try_*_with` variant taking a [`MatchGuard`]; the guard is
//! checked once per offset attempt and once per star retry, which is where
//! pathological patterns spend their time. [`MatchBudget`] is the stock guard.
//!
//! ## Example
//!
//! ```rust
//! use dotstar::Pattern;
//! use dotstar::matcher::{find, is_match};
//!
//! let pattern = Pattern::new("b.*d");
//! assert!(is_match(&pattern, "xxabcdxx"));
//! assert_eq!(find(&pattern, "xxabcdxx"), Some(3));
//! ```

mod anchored;
pub mod guards;
mod search;

#[doc(inline)]
pub use guards::{MatchBudget, MatchGuard, Unbounded};
#[doc(inline)]
pub use search::{
    find,
    is_match,
    is_match_at,
    try_find_with,
    try_is_match_at_with,
    try_is_match_with,
};

#[cfg(feature = "rayon")]
pub(crate) use anchored::match_here;
#[cfg(feature = "rayon")]
pub(crate) use search::{split_start_anchor, suffixes};
