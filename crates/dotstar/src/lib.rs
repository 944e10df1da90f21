//! # `dotstar` Pattern Matcher
//!
//! A small backtracking matcher for a restricted regular-expression syntax:
//!
//! | syntax | meaning |
//! |--------|---------|
//! | `^`    | start anchor (first character only) |
//! | `$`    | end anchor (last character only) |
//! | `.`    | any single character |
//! | `c*`   | zero or more of the preceding atom |
//! | other  | a literal character |
//!
//! Nothing else is an operator: `"colou?r"` only matches the text `colou?r`.
//! Patterns are never rejected; anything malformed is matched literally.
//!
//! See:
//! * [`Pattern`] to build patterns.
//! * [`matcher`] for the matching functions, and bounded (guarded) variants.
//! * [`matching`] for configured, shareable matchers and batch matching.
//! * [`validation`] for opt-in strict pattern checks.
//!
//! ## Example
//!
//! ```rust
//! use dotstar::Pattern;
//!
//! let pattern = Pattern::new("^a.c$");
//! assert!(pattern.is_match("abc"));
//! assert!(!pattern.is_match("abbc"));
//!
//! assert!(dotstar::is_match(&Pattern::new("b.*d"), "xxabcdxx"));
//! assert_eq!(format!("{pattern}"), "/^a.c$/");
//! ```
//!
//! ## Bounded Matching
//!
//! Worst-case matching time is exponential in the number of `*`s.
//! A [`matching::MatcherOptions`] budget turns a runaway match into an
//! error, distinct from "no match":
//!
//! ```rust
//! use dotstar::matching::{MatcherOptions, TextMatcher};
//!
//! let matcher = MatcherOptions::default()
//!     .with_max_steps(1_000usize)
//!     .build("a*a*a*a*a*a*b")
//!     .unwrap();
//!
//! let err = matcher.try_is_match(&"a".repeat(64)).unwrap_err();
//! assert!(err.is_budget_exhausted());
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod errors;
pub mod matcher;
pub mod matching;
pub mod pattern;
pub mod validation;

#[doc(inline)]
pub use errors::{DSResult, DotstarError};
#[doc(inline)]
pub use matcher::{find, is_match, is_match_at};
#[doc(inline)]
pub use matching::{MatcherOptions, TextMatcher};
#[doc(inline)]
pub use pattern::{ConstPattern, Pattern};
