//! Common utility functions shared across the codebase.

/// Checks if the text contains any character outside the ASCII range.
///
/// # Examples
///
/// ```
/// use i18n_refactor::utils::contains_non_ascii;
///
/// assert!(contains_non_ascii("春123"));
/// assert!(contains_non_ascii("café"));
/// assert!(!contains_non_ascii("Hello 123"));
/// assert!(!contains_non_ascii(""));
/// ```
pub fn contains_non_ascii(text: &str) -> bool {
    !text.is_ascii()
}

/// Checks if the text contains at least one ASCII letter (`a-z`, `A-Z`).
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use i18n_refactor::utils::contains_ascii_letter;
///
/// assert!(contains_ascii_letter("Hello"));
/// assert!(contains_ascii_letter("Hello123"));
/// assert!(!contains_ascii_letter("123"));
/// assert!(!contains_ascii_letter("---"));
/// assert!(!contains_ascii_letter("$100"));
/// assert!(!contains_ascii_letter(""));
/// ```
pub fn contains_ascii_letter(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_alphabetic())
}
