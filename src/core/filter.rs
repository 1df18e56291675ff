//! Filtering applied to every hit, whichever extractor produced it.
//!
//! Runs after the extractor's own exclusions: first the shape checks in
//! [`is_candidate`], then the user's exclusion dictionaries.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    core::exclusion::ExclusionMatcher,
    utils::{contains_ascii_letter, contains_non_ascii},
};

/// Strings made up only of escape sequences and whitespace.
static ESCAPE_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(?:\\[nrtvef0\\'"$]|\s)+$"#).unwrap());

/// Leading constructs that mark a string as a regular expression.
const REGEX_PREFIXES: &[&str] = &[
    "(?:", "(?=", "(?!", "(?<", r"\d", r"\w", r"\s", r"\b", "^[", r"^\",
];

/// Characters that never start a sentence or a word: selectors, paths,
/// variables, format fragments.
const INVALID_START_CHARS: &[char] = &[
    '#', ',', '/', '$', '.', '!', ':', ';', ')', ']', '}', '%', '&', '@', '?', '^', '~', '`',
];

/// Shape checks on an already-trimmed string.
///
/// - not empty
/// - at least `min_bytes` bytes of UTF-8
/// - not purely ASCII digits and symbols; any non-ASCII character lifts this
/// - not escape sequences only, not a regex, no invalid first character
pub fn is_candidate(text: &str, min_bytes: usize) -> bool {
    if text.is_empty() || text.len() < min_bytes {
        return false;
    }
    if !contains_non_ascii(text) && !contains_ascii_letter(text) {
        return false;
    }
    if ESCAPE_ONLY.is_match(text) {
        return false;
    }
    if REGEX_PREFIXES.iter().any(|p| text.starts_with(p)) {
        return false;
    }
    !text.starts_with(INVALID_START_CHARS)
}

/// The generic filter: shape checks plus the exclusion dictionaries.
pub struct HitFilter<'a> {
    matcher: &'a ExclusionMatcher,
    min_bytes: usize,
}

impl<'a> HitFilter<'a> {
    pub fn new(matcher: &'a ExclusionMatcher, min_bytes: usize) -> Self {
        Self { matcher, min_bytes }
    }

    pub fn accepts(&self, text: &str) -> bool {
        is_candidate(text, self.min_bytes) && !self.matcher.should_exclude(text)
    }
}
