use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::{
    cli::args::ExtractArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        data::SourceFile,
        exclusion::ExclusionMatcher,
        file_scanner::scan_files,
        options::ScanOptions,
        pipeline::{ExtractionResult, run_extraction},
    },
};

/// Everything an extraction run needs, resolved once at the command boundary.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--min-bytes 3`)
/// 2. `.i18nrc.json` config file
/// 3. Built-in defaults
pub struct ExtractContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Canonicalized scan root.
    pub root_dir: PathBuf,

    /// Candidate files in discovery order.
    pub files: Vec<SourceFile>,

    /// Built-in rules followed by every configured dictionary.
    pub matcher: ExclusionMatcher,

    pub options: ScanOptions,

    pub verbose: bool,
}

impl ExtractContext {
    /// Create a new `ExtractContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The scan root does not exist
    /// - Config file is invalid, or the merged config fails validation
    /// - An exclusion dictionary cannot be read
    /// - The file pattern is not a valid glob
    pub fn new(args: &ExtractArgs) -> Result<Self> {
        let verbose = args.verbose;

        let root_dir = args
            .dir
            .canonicalize()
            .with_context(|| format!("Cannot access directory: {}", args.dir.display()))?;

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file() {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }

        let dict_base = config_result
            .base_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root_dir.clone());
        let mut config = config_result.config;
        apply_overrides(&mut config, args);
        config.validate()?;

        let dict_paths: Vec<PathBuf> = config
            .exclusion_dicts
            .iter()
            .map(|p| dict_base.join(p))
            .chain(args.exclusion_dicts.iter().cloned())
            .collect();
        let matcher = ExclusionMatcher::with_defaults().append_files(&dict_paths)?;

        if verbose {
            eprintln!(
                "{} {} exclusion rule(s) loaded",
                "note:".bold(),
                matcher.len()
            );
        }

        let scan_result = scan_files(&root_dir, &config.pattern, &config.ignores, verbose)?;
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let options = config.scan_options();

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            matcher,
            options,
            verbose,
        })
    }

    /// Run extraction over every discovered file.
    pub fn extract(&self) -> ExtractionResult {
        run_extraction(&self.files, &self.matcher, &self.options, self.verbose)
    }
}

fn apply_overrides(config: &mut Config, args: &ExtractArgs) {
    if let Some(ref pattern) = args.pattern {
        config.pattern = pattern.clone();
    }
    config.ignores.extend(args.excludes.iter().cloned());
    if let Some(min_bytes) = args.min_bytes {
        config.min_bytes = min_bytes;
    }
    if let Some(context_lines) = args.context_lines {
        config.context_lines = context_lines;
    }
    if args.split_threshold.is_some() {
        config.split_threshold = args.split_threshold;
    }
    if args.no_templates {
        config.scan_templates = false;
    }
    if args.scripts {
        config.scan_scripts = true;
    }
}
