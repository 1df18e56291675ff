use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use super::data::{FileKind, SourceFile};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory names.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Matching templates and scripts, sorted by path.
    pub files: Vec<SourceFile>,
    pub skipped_count: usize,
}

struct IgnoreSet {
    names: Vec<String>,
    globs: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(ignore_patterns: &[String], verbose: bool) -> Self {
        let mut names = Vec::new();
        let mut globs = Vec::new();

        for p in ignore_patterns {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => globs.push(pattern),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid ignore pattern '{}': {}",
                                "warning:".bold().yellow(),
                                p,
                                e
                            );
                        }
                    }
                }
            } else {
                names.push(p.trim_matches('/').to_string());
            }
        }
        Self { names, globs }
    }

    /// `relative` is the path below the scan root. Literal entries match a
    /// leading path or any single component.
    fn is_ignored(&self, relative: &Path) -> bool {
        let literal = self.names.iter().any(|n| {
            relative.starts_with(n) || relative.components().any(|c| c.as_os_str() == n.as_str())
        });
        literal || self.globs.iter().any(|g| g.matches_path(relative))
    }
}

/// Walk `root` and collect the files whose root-relative path matches
/// `pattern`, pruning ignored directories.
///
/// Ignore entries without wildcards are directory or file names matched
/// against every path component; the rest are globs matched against the
/// root-relative path.
pub fn scan_files(
    root: &Path,
    pattern: &str,
    ignore_patterns: &[String],
    verbose: bool,
) -> Result<ScanResult> {
    let include = Pattern::new(pattern)
        .with_context(|| format!("Invalid file pattern '{}'", pattern))?;
    let ignores = IgnoreSet::new(ignore_patterns, verbose);

    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .map(|rel| rel.as_os_str().is_empty() || !ignores.is_ignored(rel))
                .unwrap_or(true)
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if !include.matches_path(relative) {
            continue;
        }
        if let Some(kind) = FileKind::from_path(path) {
            files.push(SourceFile::new(path, kind));
        }
    }

    files.sort();
    Ok(ScanResult {
        files,
        skipped_count,
    })
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn relative_names(root: &Path, result: &ScanResult) -> Vec<String> {
        result
            .files
            .iter()
            .map(|f| {
                f.path
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_scan_php_files_tagged_by_kind() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join("welcome.blade.php")).unwrap();
        File::create(dir_path.join("routes.php")).unwrap();
        File::create(dir_path.join("app.js")).unwrap();

        let result = scan_files(dir_path, "**/*.php", &[], false).unwrap();

        assert_eq!(result.files.len(), 2);
        assert_eq!(result.files[0].kind, FileKind::Script);
        assert!(result.files[0].path.ends_with("routes.php"));
        assert_eq!(result.files[1].kind, FileKind::Template);
        assert!(result.files[1].path.ends_with("welcome.blade.php"));
    }

    #[test]
    fn test_scan_ignores_literal_directories() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let vendor = dir_path.join("vendor").join("laravel");
        fs::create_dir_all(&vendor).unwrap();
        File::create(vendor.join("Framework.php")).unwrap();
        File::create(dir_path.join("index.php")).unwrap();

        let result = scan_files(dir_path, "**/*.php", &["vendor".to_owned()], false).unwrap();

        assert_eq!(relative_names(dir_path, &result), vec!["index.php"]);
    }

    #[test]
    fn test_scan_ignores_glob_patterns() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let cache = dir_path.join("storage").join("cache");
        fs::create_dir_all(&cache).unwrap();
        File::create(cache.join("compiled.php")).unwrap();
        File::create(dir_path.join("index.php")).unwrap();

        let result = scan_files(dir_path, "**/*.php", &["**/cache".to_owned()], false).unwrap();

        assert_eq!(relative_names(dir_path, &result), vec!["index.php"]);
    }

    #[test]
    fn test_scan_ignores_literal_nested_path() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let compiled = dir_path.join("storage").join("framework");
        fs::create_dir_all(&compiled).unwrap();
        File::create(compiled.join("view.php")).unwrap();
        let logs = dir_path.join("storage").join("logs");
        fs::create_dir_all(&logs).unwrap();
        File::create(logs.join("keep.php")).unwrap();

        let result =
            scan_files(dir_path, "**/*.php", &["storage/framework".to_owned()], false).unwrap();

        assert_eq!(relative_names(dir_path, &result), vec!["storage/logs/keep.php"]);
    }

    #[test]
    fn test_scan_nested_directories_sorted() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let views = dir_path.join("resources").join("views");
        fs::create_dir_all(&views).unwrap();
        File::create(views.join("home.blade.php")).unwrap();
        File::create(views.join("about.blade.php")).unwrap();

        let app = dir_path.join("app");
        fs::create_dir(&app).unwrap();
        File::create(app.join("User.php")).unwrap();

        let result = scan_files(dir_path, "**/*.php", &[], false).unwrap();

        assert_eq!(
            relative_names(dir_path, &result),
            vec![
                "app/User.php",
                "resources/views/about.blade.php",
                "resources/views/home.blade.php",
            ]
        );
    }

    #[test]
    fn test_scan_with_narrow_pattern() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let views = dir_path.join("resources").join("views");
        fs::create_dir_all(&views).unwrap();
        File::create(views.join("home.blade.php")).unwrap();
        File::create(dir_path.join("index.php")).unwrap();

        let result = scan_files(dir_path, "resources/**/*.blade.php", &[], false).unwrap();

        assert_eq!(
            relative_names(dir_path, &result),
            vec!["resources/views/home.blade.php"]
        );
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(scan_files(dir.path(), "[unclosed", &[], false).is_err());
    }

    #[test]
    fn test_is_glob_pattern() {
        assert!(is_glob_pattern("**/cache"));
        assert!(is_glob_pattern("*.log"));
        assert!(!is_glob_pattern("vendor"));
        assert!(!is_glob_pattern("storage/framework"));
    }
}
