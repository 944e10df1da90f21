//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel matching.
//!
//! * [`ParallelRayonMatcher`] - batch-level parallelism around any [`crate::matching::TextMatcher`].
//! * [`par_find`] / [`par_is_match`] - offset-level parallelism for a single long text.

mod par_search;
mod rayon_matcher;

pub use par_search::{par_find, par_is_match};
pub use rayon_matcher::ParallelRayonMatcher;
