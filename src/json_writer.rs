//! JSON output for extracted strings.
//!
//! Records are sorted by text, pretty-printed with two-space indentation and
//! a trailing newline. Large result sets can be split across numbered files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::ExtractedString;

/// Order records by their text. Stable, so equal texts keep their order.
pub fn sort_by_text(strings: &mut [ExtractedString]) {
    strings.sort_by(|a, b| a.text.cmp(&b.text));
}

/// Serialize records to pretty JSON with a trailing newline.
pub fn to_json(strings: &[ExtractedString]) -> Result<String> {
    let content = serde_json::to_string_pretty(strings).context("Failed to serialize JSON")?;
    Ok(format!("{}\n", content))
}

/// Path of the `n`th output chunk (1-based).
///
/// The first chunk keeps the given name; chunk `n` is `<stem>-<n><ext>` in
/// the same directory.
pub fn chunk_path(path: &Path, n: usize) -> PathBuf {
    if n <= 1 {
        return path.to_path_buf();
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, n, ext.to_string_lossy()),
        None => format!("{}-{}", stem, n),
    };
    path.with_file_name(name)
}

/// Write records to `path`, splitting into chunks of at most
/// `split_threshold` records when set. Returns the files written.
pub fn write_output(
    path: &Path,
    strings: &[ExtractedString],
    split_threshold: Option<usize>,
) -> Result<Vec<PathBuf>> {
    let chunks: Vec<&[ExtractedString]> = match split_threshold {
        Some(limit) if limit > 0 && strings.len() > limit => strings.chunks(limit).collect(),
        _ => vec![strings],
    };

    let mut written = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.into_iter().enumerate() {
        let target = chunk_path(path, i + 1);
        save(&target, chunk)?;
        written.push(target);
    }
    Ok(written)
}

fn save(path: &Path, strings: &[ExtractedString]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, to_json(strings)?)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
