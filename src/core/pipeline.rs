//! Per-file extraction and the ordered merge.
//!
//! Files are processed in parallel, each producing its own `FileStrings` or
//! `FileError`. Results are collected in input order and merged
//! sequentially, so output never depends on thread scheduling.

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use super::{
    consolidate::{FileStrings, StringConsolidator},
    data::{ExtractedString, SourceFile},
    exclusion::ExclusionMatcher,
    extract::extract_file,
    filter::HitFilter,
    options::ScanOptions,
    position::LineIndex,
};

/// A file that could not be read or scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    pub file_path: String,
    pub error: String,
}

/// Everything one extraction run produced.
#[derive(Debug, Default)]
pub struct ExtractionResult {
    /// Distinct strings in first-seen order.
    pub strings: Vec<ExtractedString>,
    /// Files scanned successfully.
    pub files_processed: usize,
    pub errors: Vec<FileError>,
}

impl ExtractionResult {
    pub fn total_occurrences(&self) -> usize {
        self.strings.iter().map(|s| s.total_positions()).sum()
    }
}

/// Extract, filter and consolidate `files` in the given order.
///
/// Files of a type disabled in `options` are skipped.
pub fn run_extraction(
    files: &[SourceFile],
    matcher: &ExclusionMatcher,
    options: &ScanOptions,
    verbose: bool,
) -> ExtractionResult {
    let results: Vec<Result<FileStrings, FileError>> = files
        .par_iter()
        .filter(|file| options.scans(file.kind))
        .map(|file| {
            extract_strings(file, matcher, options).map_err(|e| FileError {
                file_path: file.display_path(),
                error: format!("{:#}", e),
            })
        })
        .collect();

    let mut consolidator = StringConsolidator::new();
    let mut files_processed = 0;
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(file) => {
                files_processed += 1;
                consolidator.add_file(file);
            }
            Err(error) => {
                if verbose {
                    eprintln!(
                        "{} {} - {}",
                        "warning:".bold().yellow(),
                        error.file_path,
                        error.error
                    );
                }
                errors.push(error);
            }
        }
    }

    ExtractionResult {
        strings: consolidator.into_strings(),
        files_processed,
        errors,
    }
}

/// Read one file and extract its surviving strings.
pub fn extract_strings(
    file: &SourceFile,
    matcher: &ExclusionMatcher,
    options: &ScanOptions,
) -> Result<FileStrings> {
    let content = fs::read_to_string(&file.path)
        .with_context(|| format!("Failed to read file: {}", file.path.display()))?;
    extract_from_content(file, &content, matcher, options)
}

/// Extract the surviving strings of already-loaded content.
pub fn extract_from_content(
    file: &SourceFile,
    content: &str,
    matcher: &ExclusionMatcher,
    options: &ScanOptions,
) -> Result<FileStrings> {
    let hits = extract_file(file.kind, content, options)
        .with_context(|| format!("Failed to scan {} file", file.kind))?;

    let filter = HitFilter::new(matcher, options.min_bytes);
    let index = LineIndex::new(content);

    let strings = hits
        .into_iter()
        .filter(|hit| filter.accepts(&hit.text))
        .map(|hit| {
            let position = index.position(&hit, options.context_lines);
            (hit.text, position)
        })
        .collect();

    Ok(FileStrings {
        file: file.display_path(),
        strings,
    })
}
