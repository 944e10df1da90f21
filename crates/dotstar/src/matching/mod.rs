//! # Text Matchers
//!
//! [`TextMatcher`] is the configured, shareable face of the matcher:
//! a pattern, optional per-call budgets, and batch operations.
//!
//! * [`MatcherOptions`] - declarative configuration; `build()` picks an implementation.
//! * [`DefaultTextMatcher`] - a pattern plus options.
//! * `ParallelRayonMatcher` - a batch parallelism wrapper (feature "rayon").
//!
//! ## Example
//!
//! ```rust
//! use dotstar::matching::{MatcherOptions, TextMatcher};
//!
//! let matcher = MatcherOptions::default()
//!     .with_max_steps(10_000usize)
//!     .build("^a.c$")
//!     .unwrap();
//!
//! assert_eq!(matcher.try_filter(&["abc", "ac", "abbc", "a-c"]).unwrap(), vec![0, 3]);
//! ```

mod default_matcher;
mod matcher_options;
mod text_matcher;

#[doc(inline)]
pub use default_matcher::DefaultTextMatcher;
#[doc(inline)]
pub use matcher_options::MatcherOptions;
#[doc(inline)]
pub use text_matcher::{TextMatcher, TextMatcherHandle};
