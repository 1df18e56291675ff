//! Per-file candidate extraction.
//!
//! Routes a file to the extractor for its type. Extractors only find
//! candidates (`RawHit`s) and apply their own syntactic exclusions; the
//! generic filter and positioning happen in the pipeline.
//!
//! ## Module Structure
//!
//! - `blade`: Blade/PHP region scanner for templates
//! - `script`: PHP string literal extraction with signature exclusions
//! - `template`: Markup text, attribute and `<script>` literal extraction

pub mod blade;
pub mod script;
pub mod template;

use anyhow::Result;

use super::{data::FileKind, data::RawHit, options::ScanOptions};

/// Find candidate strings in one file's content.
pub fn extract_file(kind: FileKind, content: &str, options: &ScanOptions) -> Result<Vec<RawHit>> {
    match kind {
        FileKind::Template => template::extract(content, &options.checked_attributes),
        FileKind::Script => Ok(script::extract(content)),
    }
}
