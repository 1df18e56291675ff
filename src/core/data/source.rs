use std::path::{Path, PathBuf};

const TEMPLATE_SUFFIX: &str = ".blade.php";
const SCRIPT_EXTENSION: &str = "php";

/// Which extractor a file is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileKind {
    /// Blade template (`*.blade.php`): markup with embedded template syntax.
    Template,
    /// Plain PHP source (`*.php`).
    Script,
}

impl FileKind {
    /// Classify a path by its file name. Returns `None` for files that are
    /// neither templates nor scripts.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with(TEMPLATE_SUFFIX) && name.len() > TEMPLATE_SUFFIX.len() {
            return Some(FileKind::Template);
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some(SCRIPT_EXTENSION) => Some(FileKind::Script),
            _ => None,
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Template => write!(f, "template"),
            FileKind::Script => write!(f, "script"),
        }
    }
}

/// A candidate file produced by discovery, tagged with its type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    pub path: PathBuf,
    pub kind: FileKind,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Path as it appears in the output.
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
