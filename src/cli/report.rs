//! Report formatting and printing utilities.
//!
//! The `text` output format prints every position cargo-style, with the
//! surrounding lines and a caret under the string. Run summaries and
//! warnings go to stderr so stdout stays machine-readable in JSON mode.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{ExtractedString, ExtractionResult, Position};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print every position of every string to stdout.
///
/// `context_lines` is the window the positions were built with; it is
/// needed to number the context lines.
pub fn report(strings: &[ExtractedString], context_lines: usize) {
    report_to(strings, context_lines, &mut io::stdout().lock());
}

/// Print the report to a custom writer.
pub fn report_to<W: Write>(strings: &[ExtractedString], context_lines: usize, writer: &mut W) {
    let max_line_width = calculate_max_line_width(strings, context_lines);

    for string in strings {
        for occurrence in &string.occurrences {
            for position in &occurrence.positions {
                print_position(
                    &string.text,
                    &occurrence.file,
                    position,
                    context_lines,
                    max_line_width,
                    writer,
                );
            }
        }
    }
}

fn print_position<W: Write>(
    text: &str,
    file: &str,
    position: &Position,
    context_lines: usize,
    max_line_width: usize,
    writer: &mut W,
) {
    let _ = writeln!(writer, "{}: \"{}\"", "string".bold().green(), text);
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        file,
        position.line,
        position.column + 1
    );

    if position.context.is_empty() {
        let _ = writeln!(writer);
        return;
    }

    let first_line = first_context_line(position, context_lines);
    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    for (i, source_line) in position.context.iter().enumerate() {
        let line = first_line + i;
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        if line == position.line {
            let prefix: String = source_line.chars().take(position.column).collect();
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            let _ = writeln!(
                writer,
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                "^".green(),
                width = max_line_width,
                padding = caret_padding
            );
        }
    }
    let _ = writeln!(writer);
}

/// Line number of the first context line. Windows are clipped at the start
/// of the file, never shifted.
fn first_context_line(position: &Position, context_lines: usize) -> usize {
    let before = (context_lines.saturating_sub(1) / 2).min(position.line - 1);
    position.line - before
}

fn calculate_max_line_width(strings: &[ExtractedString], context_lines: usize) -> usize {
    strings
        .iter()
        .flat_map(|s| &s.occurrences)
        .flat_map(|o| &o.positions)
        .map(|p| first_context_line(p, context_lines) + p.context.len().max(1) - 1)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

/// Print the run summary to stderr.
pub fn print_summary(result: &ExtractionResult, verbose: bool) {
    print_summary_to(result, verbose, &mut io::stderr().lock());
}

pub fn print_summary_to<W: Write>(result: &ExtractionResult, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Processed {} {}: {} unique {}, {} {}",
            result.files_processed,
            plural(result.files_processed, "file", "files"),
            result.strings.len(),
            plural(result.strings.len(), "string", "strings"),
            result.total_occurrences(),
            plural(result.total_occurrences(), "occurrence", "occurrences"),
        )
        .green()
    );

    print_failure_warning_to(result.errors.len(), verbose, writer);
}

/// Print a warning about files that could not be read or scanned.
///
/// In verbose mode each failure was already reported as it happened, so only
/// the count is repeated.
pub fn print_failure_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count == 0 {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} {} could not be read or scanned{}",
        "warning:".bold().yellow(),
        count,
        plural(count, "file", "files"),
        if verbose {
            String::new()
        } else {
            format!(" (use {} for details)", "-v".cyan())
        }
    );
}

/// Print the files written by `--output`.
pub fn print_written(paths: &[PathBuf], record_count: usize) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} {} to {} {}",
            record_count,
            plural(record_count, "record", "records"),
            paths.len(),
            plural(paths.len(), "file", "files"),
        )
        .green()
    );
    for path in paths {
        let _ = writeln!(stderr, "  {} {}", "-->".blue(), path.display());
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
