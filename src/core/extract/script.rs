//! String literal extraction from PHP source.
//!
//! PHP files may carry foreign syntax (Blade fragments, heredocs, inline
//! HTML), so no parser is used. The lexer in [`crate::core::utils::lexing`]
//! finds every quoted literal; each one is then checked against:
//!
//! - excluded function definitions (`casts()`, `rules()`)
//! - array-key position (`'key' => ...`, `$a['key']`)
//! - a table of call signatures found in the code just before the literal
//!   (translation, logging, debug output, framework helpers, ...)

use std::{ops::Range, sync::LazyLock};

use regex::Regex;

use crate::core::{
    data::RawHit,
    position::trim_span,
    utils::{Dialect, Literal, RangeSet, code_only, find_matching, string_literals},
};

/// Bytes of code before a literal searched for an enclosing call.
const LOOKBEHIND_WINDOW: usize = 200;

/// Bytes after a literal searched for a `=>` separator.
const KEY_LOOKAHEAD: usize = 100;

/// Why a literal was recognised as non-user-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureCategory {
    Translation,
    Logging,
    DebugOutput,
    CommandOutput,
    RegexFunction,
    Builtin,
    FrameworkHelper,
    QueryBuilder,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// Pattern ends at the opening parenthesis of a call; the literal must
    /// still be inside that call.
    Call,
    /// Language construct without parentheses; the literal must precede the
    /// terminating `;`.
    Statement,
}

struct Signature {
    category: SignatureCategory,
    shape: Shape,
    regex: Regex,
}

impl Signature {
    fn pattern(category: SignatureCategory, pattern: &str) -> Self {
        Self {
            category,
            shape: Shape::Call,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    fn statement(category: SignatureCategory, pattern: &str) -> Self {
        Self {
            category,
            shape: Shape::Statement,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    /// Free function call: `name(`, `\name(`, but not `->name(` or `::name(`.
    fn function(category: SignatureCategory, names: &[&str]) -> Self {
        Self::pattern(
            category,
            &format!(r"(?:^|[^\w$>:])(?:{})\s*\(", alternation(names)),
        )
    }

    /// Instance or static method call: `->name(` or `::name(`.
    fn method(category: SignatureCategory, names: &[&str]) -> Self {
        Self::pattern(
            category,
            &format!(r"(?:->|::)\s*(?:{})\s*\(", alternation(names)),
        )
    }

    /// True if the code in `window` (ending right before a literal) places
    /// the literal inside this construct.
    fn encloses(&self, window: &str) -> bool {
        match self.shape {
            Shape::Call => self
                .regex
                .find_iter(window)
                .any(|m| find_matching(window, m.end() - 1, Dialect::Php).is_none()),
            Shape::Statement => self
                .regex
                .find_iter(window)
                .any(|m| !window[m.end()..].contains(';')),
        }
    }
}

fn alternation(names: &[&str]) -> String {
    names
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|")
}

const BUILTIN_FUNCTIONS: &[&str] = &[
    "function_exists", "class_exists", "method_exists", "interface_exists", "trait_exists",
    "defined", "define", "extension_loaded", "in_array", "array_key_exists",
    "array_search", "array_column", "array_filter", "array_map", "isset", "empty",
    "compact", "extract", "gettype", "get_class", "get_called_class", "get_parent_class",
    "is_a", "is_subclass_of", "property_exists", "constant", "call_user_func",
    "call_user_func_array", "header", "setcookie", "setrawcookie", "session_name",
    "session_id", "session_save_path", "ini_get", "ini_set", "ini_restore", "putenv",
    "getenv", "file_exists", "is_file", "is_dir", "is_readable", "is_writable",
    "filetype", "mime_content_type", "stream_context_create", "stream_wrapper_register",
    "trigger_error", "user_error", "error_reporting", "date", "strtotime", "strftime",
    "timezone_name_from_abbr", "sprintf", "vsprintf", "sscanf", "parse_url",
    "http_build_query",
];

const HELPER_FUNCTIONS: &[&str] = &[
    "app_path", "base_path", "config_path", "database_path", "public_path",
    "resource_path", "storage_path", "asset", "secure_asset", "route", "secure_url",
    "url", "action", "config", "env", "session", "old", "request", "view", "response",
    "redirect", "back", "auth", "bcrypt", "hash", "cache", "event", "broadcast",
    "dispatch", "dispatch_sync", "validator", "class_basename", "e",
    "preg_replace_array", "str", "data_get", "data_set", "data_fill", "head", "last",
    "abort", "abort_if", "abort_unless", "app", "collect", "cookie", "decrypt",
    "encrypt", "method_field", "now", "optional", "policy", "resolve", "retry", "tap",
    "throw_if", "throw_unless", "today", "trait_uses_recursive", "transform", "value",
    "with",
];

const QUERY_METHODS: &[&str] = &[
    "select", "where", "whereIn", "whereNotIn", "whereBetween", "whereNull",
    "whereNotNull", "orderBy", "groupBy", "having", "join", "leftJoin", "rightJoin",
    "pluck", "value", "raw", "table", "format",
];

static SIGNATURES: LazyLock<Vec<Signature>> = LazyLock::new(|| {
    use SignatureCategory::*;
    vec![
        Signature::function(Translation, &["__", "trans", "trans_choice"]),
        Signature::pattern(Translation, r"@lang\s*\("),
        Signature::pattern(Translation, r"\bLang::(?:get|choice|has)\s*\("),
        Signature::pattern(
            Logging,
            r"\bLog::(?:emergency|alert|critical|error|warning|notice|info|debug|log)\s*\(",
        ),
        Signature::function(Logging, &["logger", "error_log", "info"]),
        Signature::function(DebugOutput, &["var_dump", "var_export", "dd", "dump", "print_r"]),
        Signature::statement(DebugOutput, r"\b(?:echo|print)\s"),
        Signature::pattern(
            CommandOutput,
            r"\$this->(?:info|error|line|comment|warn|warning|question|alert)\s*\(",
        ),
        Signature::pattern(RegexFunction, r"\bpreg_[a-z_]+\s*\("),
        Signature::function(Builtin, BUILTIN_FUNCTIONS),
        Signature::function(FrameworkHelper, HELPER_FUNCTIONS),
        Signature::method(QueryBuilder, QUERY_METHODS),
        Signature::method(Validation, &["validate", "validateWithBag"]),
    ]
});

/// Methods whose whole body is configuration, never user-facing text.
static EXCLUDED_DEFINITIONS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bprotected\s+function\s+casts\s*\(\s*\)\s*:\s*array\s*\{",
        r"\bpublic\s+function\s+rules\s*\(\s*\)\s*:\s*array\s*\{",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Extract candidate strings from a whole PHP file.
pub fn extract(content: &str) -> Vec<RawHit> {
    extract_range(content, 0..content.len())
}

/// Extract candidate strings from `content[range]`.
///
/// Used directly for `@php` and `<?php` blocks inside templates. Offsets in
/// the returned hits are relative to the whole of `content`, and lookbehind
/// never crosses `range.start`.
pub fn extract_range(content: &str, range: Range<usize>) -> Vec<RawHit> {
    let excluded = excluded_definitions(content, &range);
    let code = code_only(content, range.clone(), Dialect::Php);

    string_literals(content, range.clone(), Dialect::Php)
        .into_iter()
        .filter(|lit| !excluded.overlaps(&(lit.start()..lit.end())))
        .filter(|lit| !is_array_key(content, lit))
        .filter(|lit| signature_before(&code, lit.start() - range.start).is_none())
        .filter_map(|lit| {
            let (text, offset) = trim_span(&content[lit.body.clone()], lit.body.start)?;
            Some(RawHit::new(text, offset))
        })
        .collect()
}

/// The signature whose call or statement is still open at byte `end` of
/// `code`, the comment- and string-free copy of the scanned scope.
fn signature_before(code: &str, end: usize) -> Option<SignatureCategory> {
    let mut start = end.saturating_sub(LOOKBEHIND_WINDOW);
    while start < end && !code.is_char_boundary(start) {
        start += 1;
    }
    let window = &code[start..end];

    SIGNATURES
        .iter()
        .find(|sig| sig.encloses(window))
        .map(|sig| sig.category)
}

/// `'key' => value`, `$a['key']` and `$a['key'] = value`.
pub fn is_array_key(content: &str, literal: &Literal) -> bool {
    let rest = &content[literal.end()..];
    let after = rest.trim_start();
    let skipped = rest.len() - after.len();

    if after.starts_with("=>") && skipped <= KEY_LOOKAHEAD {
        return true;
    }

    content[..literal.start()].trim_end().ends_with('[') && after.starts_with(']')
}

fn excluded_definitions(content: &str, range: &Range<usize>) -> RangeSet {
    let scope = &content[range.clone()];
    EXCLUDED_DEFINITIONS
        .iter()
        .flat_map(|re| re.find_iter(scope))
        .map(|m| {
            let start = range.start + m.start();
            let brace = range.start + m.end() - 1;
            let end = find_matching(content, brace, Dialect::Php)
                .map(|close| close + 1)
                .unwrap_or(range.end);
            start..end
        })
        .collect()
}
