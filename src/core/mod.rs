//! Core extraction engine.
//!
//! A run moves through four steps:
//!
//! 1. **Discovery**: `file_scanner` walks the scan root and tags each file as
//!    template or script
//! 2. **Extraction**: per-file extractors in `extract` find candidate strings
//!    (`RawHit`s) and apply their syntactic exclusions
//! 3. **Filtering**: `filter` drops non-text candidates and strings matched by
//!    the `exclusion` dictionaries
//! 4. **Consolidation**: `consolidate` merges survivors by exact text, in
//!    discovery order
//!
//! ## Module Structure
//!
//! - `context`: Configuration merge and run setup (ExtractContext)
//! - `data`: Shared data types (RawHit, Position, ExtractedString, SourceFile)
//! - `exclusion`: Exclusion dictionaries with last-match-wins negation
//! - `extract`: Template and script extractors
//! - `file_scanner`: Deterministic file discovery
//! - `options`: Fully resolved scan options
//! - `parsers`: Markup (tree-sitter) and JavaScript (swc) parsing
//! - `pipeline`: Parallel per-file extraction and ordered merge
//! - `position`: Byte offset to line/column and context windows
//! - `utils`: Lexing helpers, glob translation, range sets

pub mod consolidate;
pub mod context;
pub mod data;
pub mod exclusion;
pub mod extract;
pub mod file_scanner;
pub mod filter;
pub mod options;
pub mod parsers;
pub mod pipeline;
pub mod position;
pub mod utils;

pub use consolidate::{FileStrings, StringConsolidator, consolidate};
pub use context::ExtractContext;
pub use data::{ExtractedString, FileKind, Occurrence, Position, RawHit, SourceFile};
pub use exclusion::ExclusionMatcher;
pub use options::ScanOptions;
pub use pipeline::{ExtractionResult, FileError};
