//! Exclusion dictionaries: ordered include/exclude rules with override semantics.
//!
//! A dictionary is plain text, one rule per line:
//!
//! ```text
//! # comment
//! Submit            exact, case-sensitive match
//! data-*            glob, anchored to the whole string
//! [0-9]*x[0-9]*     glob with character classes
//! regex:^\d+px$     regular expression, unanchored search
//! !data-important   negation: include even if an earlier rule excluded it
//! ```
//!
//! Rules are evaluated in order and the last matching rule decides. Built-in
//! rules come first, so any user dictionary can override them.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::utils::{compile_glob, is_glob_pattern};

const DEFAULT_RULES: &str = include_str!("default_rules.txt");
const REGEX_PREFIX: &str = "regex:";

/// How a rule's pattern is matched.
#[derive(Debug, Clone)]
pub enum RulePattern {
    Exact(String),
    /// Glob compiled to an anchored regex.
    Glob(Regex),
    /// User regex, searched anywhere in the text.
    Regex(Regex),
}

impl RulePattern {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            RulePattern::Exact(pattern) => pattern == text,
            RulePattern::Glob(re) | RulePattern::Regex(re) => re.is_match(text),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExclusionRule {
    pub pattern: RulePattern,
    pub negated: bool,
}

impl ExclusionRule {
    /// Parse one dictionary line. Blank lines, comments, empty negations and
    /// patterns that fail to compile yield no rule.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (negated, body) = match line.strip_prefix('!') {
            Some(rest) => (true, rest.trim()),
            None => (false, line),
        };
        if body.is_empty() {
            return None;
        }

        let pattern = if let Some(source) = body.strip_prefix(REGEX_PREFIX) {
            RulePattern::Regex(Regex::new(source).ok()?)
        } else if is_glob_pattern(body) {
            RulePattern::Glob(compile_glob(body).ok()?)
        } else {
            RulePattern::Exact(body.to_string())
        };

        Some(Self { pattern, negated })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.matches(text)
    }
}

/// Ordered rule list deciding whether a candidate string is excluded.
#[derive(Debug, Clone, Default)]
pub struct ExclusionMatcher {
    rules: Vec<ExclusionRule>,
}

impl ExclusionMatcher {
    /// A matcher with no rules; excludes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A matcher preloaded with the built-in rules.
    pub fn with_defaults() -> Self {
        Self::new().append_rules(DEFAULT_RULES)
    }

    /// Append the rules in `source` (dictionary syntax) after the existing ones.
    pub fn append_rules(mut self, source: &str) -> Self {
        self.rules
            .extend(source.lines().filter_map(ExclusionRule::parse));
        self
    }

    /// Append the rules of a dictionary file.
    ///
    /// A missing or unreadable file is a configuration error.
    pub fn append_file(self, path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read exclusion dictionary: {}", path.display()))?;
        Ok(self.append_rules(&source))
    }

    /// Append several dictionary files, in order.
    pub fn append_files<P: AsRef<Path>>(self, paths: &[P]) -> Result<Self> {
        paths
            .iter()
            .try_fold(self, |matcher, path| matcher.append_file(path.as_ref()))
    }

    /// Walk every rule; the last one that matches decides.
    pub fn should_exclude(&self, text: &str) -> bool {
        self.rules
            .iter()
            .fold(false, |excluded, rule| {
                if rule.matches(text) {
                    !rule.negated
                } else {
                    excluded
                }
            })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
