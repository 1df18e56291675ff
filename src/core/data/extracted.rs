use serde::Serialize;

/// An unfiltered candidate found by an extractor.
///
/// `offset` is the byte offset of the first character of `text` in the
/// original file content; `text` is already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHit {
    pub text: String,
    pub offset: usize,
    /// Character count of `text`.
    pub length: usize,
}

impl RawHit {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self {
            text,
            offset,
            length,
        }
    }

    /// Byte offset one past the last byte of the hit.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Where one occurrence of a string sits in its file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
    /// Length in characters.
    pub length: usize,
    /// Surrounding source lines, target line included. Empty when context
    /// collection is disabled.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,
}

impl Position {
    pub fn new(line: usize, column: usize, length: usize) -> Self {
        Self {
            line,
            column,
            length,
            context: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: Vec<String>) -> Self {
        self.context = context;
        self
    }
}

/// All positions of one string within one file, in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub file: String,
    pub positions: Vec<Position>,
}

/// A distinct extracted string and every place it was found.
///
/// Identity is the exact `text`; occurrences are kept in file-processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedString {
    pub text: String,
    pub occurrences: Vec<Occurrence>,
}

impl ExtractedString {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            occurrences: Vec::new(),
        }
    }

    /// Append a position to the occurrence for `file`, creating it if this is
    /// the first hit in that file.
    pub fn add_position(&mut self, file: &str, position: Position) {
        // Files are consolidated one at a time, so the current file is almost
        // always the last occurrence.
        let existing = if self.occurrences.last().is_some_and(|o| o.file == file) {
            Some(self.occurrences.len() - 1)
        } else {
            self.occurrences.iter().position(|o| o.file == file)
        };

        match existing {
            Some(idx) => self.occurrences[idx].positions.push(position),
            None => self.occurrences.push(Occurrence {
                file: file.to_string(),
                positions: vec![position],
            }),
        }
    }

    pub fn total_positions(&self) -> usize {
        self.occurrences.iter().map(|o| o.positions.len()).sum()
    }
}
