//! Core data types shared by the extractors, the consolidator and the output layer.
//!
//! ## Module Structure
//!
//! - `extracted`: Extraction results (RawHit, Position, Occurrence, ExtractedString)
//! - `source`: Candidate source files and their type tag (SourceFile, FileKind)

pub mod extracted;
pub mod source;

pub use extracted::{ExtractedString, Occurrence, Position, RawHit};
pub use source::{FileKind, SourceFile};
