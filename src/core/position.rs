//! Offset to line/column arithmetic over the original file content.
//!
//! Extractors report byte offsets into the unmodified source. `LineIndex`
//! turns those into 1-based lines and 0-based character columns, and slices
//! out bounded context windows for human review.

use super::data::{Position, RawHit};

pub struct LineIndex<'a> {
    content: &'a str,
    /// Byte offset at which each line starts.
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(content: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            content,
            line_starts,
        }
    }

    /// Number of lines, not counting the empty remainder after a trailing newline.
    pub fn line_count(&self) -> usize {
        if self.content.ends_with('\n') {
            self.line_starts.len() - 1
        } else {
            self.line_starts.len()
        }
    }

    /// Convert a byte offset into `(line, column)`: line is 1-based, column is
    /// the 0-based character index within that line.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = self.floor_char_boundary(offset.min(self.content.len()));
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self.content[line_start..offset].chars().count();
        (line, column)
    }

    /// Text of a 1-based line without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        if line == 0 || line > self.line_count() {
            return None;
        }
        let start = self.line_starts[line - 1];
        let end = self
            .line_starts
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(self.content.len());
        let text = &self.content[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Lines surrounding `line` for a window of `window` lines.
    ///
    /// Returns up to `(window - 1) / 2` lines on each side plus the target
    /// line, clipped at the file boundaries. A window of 0 yields nothing.
    pub fn context(&self, line: usize, window: usize) -> Vec<String> {
        if window == 0 || line == 0 || line > self.line_count() {
            return Vec::new();
        }
        let half = (window - 1) / 2;
        let first = line.saturating_sub(half).max(1);
        let last = (line + half).min(self.line_count());
        (first..=last)
            .filter_map(|l| self.line_text(l))
            .map(str::to_string)
            .collect()
    }

    /// Build the reported position for a hit.
    pub fn position(&self, hit: &RawHit, window: usize) -> Position {
        let (line, column) = self.line_col(hit.offset);
        Position::new(line, column, hit.length).with_context(self.context(line, window))
    }

    fn floor_char_boundary(&self, mut offset: usize) -> usize {
        while offset > 0 && !self.content.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

/// Trim a raw slice found at byte `offset`, returning the trimmed text and
/// the byte offset where it starts. `None` when nothing but whitespace remains.
pub fn trim_span(raw: &str, offset: usize) -> Option<(&str, usize)> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let leading = raw.len() - raw.trim_start().len();
    Some((trimmed, offset + leading))
}
