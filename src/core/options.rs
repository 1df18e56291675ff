use super::data::FileKind;

/// Fully resolved scanning options.
///
/// Built once by the command layer from config and CLI flags; the core never
/// falls back to defaults of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Minimum UTF-8 byte length of an extracted string.
    pub min_bytes: usize,
    /// Context window size in lines (odd, or 0 for none).
    pub context_lines: usize,
    pub scan_templates: bool,
    pub scan_scripts: bool,
    /// Attributes whose values are candidates in templates.
    pub checked_attributes: Vec<String>,
}

impl ScanOptions {
    pub fn scans(&self, kind: FileKind) -> bool {
        match kind {
            FileKind::Template => self.scan_templates,
            FileKind::Script => self.scan_scripts,
        }
    }
}
