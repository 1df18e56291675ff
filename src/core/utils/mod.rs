//! Utility functions shared by the extractors and the exclusion matcher.
//!
//! ## Module Structure
//!
//! - `glob_matcher`: Translation of exclusion-dictionary globs into anchored regexes
//! - `lexing`: Quote- and comment-aware scanning helpers for PHP/JS-like code
//! - `ranges`: Sorted, non-overlapping byte interval sets

pub mod glob_matcher;
pub mod lexing;
pub mod ranges;

pub use glob_matcher::*;
pub use lexing::*;
pub use ranges::*;
