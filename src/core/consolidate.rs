//! Merging per-file results into one deduplicated collection.

use std::collections::HashMap;

use super::data::{ExtractedString, Position};

/// Surviving strings of one file, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStrings {
    pub file: String,
    pub strings: Vec<(String, Position)>,
}

/// Accumulates strings by exact text, keeping first-seen order everywhere.
#[derive(Debug, Default)]
pub struct StringConsolidator {
    strings: Vec<ExtractedString>,
    index: HashMap<String, usize>,
}

impl StringConsolidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, file: &str, text: String, position: Position) {
        let idx = match self.index.get(&text) {
            Some(&idx) => idx,
            None => {
                let idx = self.strings.len();
                self.strings.push(ExtractedString::new(text.clone()));
                self.index.insert(text, idx);
                idx
            }
        };
        self.strings[idx].add_position(file, position);
    }

    pub fn add_file(&mut self, file: FileStrings) {
        for (text, position) in file.strings {
            self.add(&file.file, text, position);
        }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn into_strings(self) -> Vec<ExtractedString> {
        self.strings
    }
}

/// Consolidate files in the order given.
pub fn consolidate(files: impl IntoIterator<Item = FileStrings>) -> Vec<ExtractedString> {
    let mut consolidator = StringConsolidator::new();
    for file in files {
        consolidator.add_file(file);
    }
    consolidator.into_strings()
}
