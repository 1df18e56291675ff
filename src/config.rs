use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::ScanOptions;

pub const CONFIG_FILE_NAME: &str = ".i18nrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob selecting files, relative to the scan root.
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Directory names or globs to skip.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Exclusion dictionary files, relative to the config file.
    #[serde(default)]
    pub exclusion_dicts: Vec<String>,
    #[serde(default = "default_checked_attributes")]
    pub checked_attributes: Vec<String>,
    #[serde(default = "default_min_bytes")]
    pub min_bytes: usize,
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
    /// Maximum records per output file; unset writes a single file.
    #[serde(default)]
    pub split_threshold: Option<usize>,
    #[serde(default = "default_scan_templates")]
    pub scan_templates: bool,
    #[serde(default)]
    pub scan_scripts: bool,
}

fn default_pattern() -> String {
    "**/*.php".to_string()
}

fn default_ignores() -> Vec<String> {
    ["vendor", "node_modules", "storage", ".git"]
        .map(String::from)
        .to_vec()
}

fn default_checked_attributes() -> Vec<String> {
    [
        "placeholder",
        "title",
        "alt",
        "value",
        "aria-label",
        "aria-description",
        "aria-placeholder",
        "data-title",
    ]
    .map(String::from)
    .to_vec()
}

fn default_min_bytes() -> usize {
    2
}

fn default_context_lines() -> usize {
    5
}

fn default_scan_templates() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            ignores: default_ignores(),
            exclusion_dicts: Vec::new(),
            checked_attributes: default_checked_attributes(),
            min_bytes: default_min_bytes(),
            context_lines: default_context_lines(),
            split_threshold: None,
            scan_templates: default_scan_templates(),
            scan_scripts: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for an even context window, a zero split threshold,
    /// or any invalid glob in `pattern` or `ignores`.
    pub fn validate(&self) -> Result<()> {
        if self.context_lines % 2 == 0 && self.context_lines != 0 {
            bail!(
                "Invalid 'contextLines': {} (must be an odd number, or 0 to disable context)",
                self.context_lines
            );
        }

        if self.split_threshold == Some(0) {
            bail!("Invalid 'splitThreshold': must be at least 1");
        }

        Pattern::new(&self.pattern)
            .with_context(|| format!("Invalid glob pattern in 'pattern': \"{}\"", self.pattern))?;

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// The options handed to the extraction core.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            min_bytes: self.min_bytes,
            context_lines: self.context_lines,
            scan_templates: self.scan_templates,
            scan_scripts: self.scan_scripts,
            checked_attributes: self.checked_attributes.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Directory that relative paths in the config are resolved against.
    pub fn base_dir(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
