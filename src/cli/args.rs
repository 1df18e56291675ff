//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Find hardcoded, user-facing strings and write them as JSON or a report
//! - `init`: Initialize the `.i18nrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(args)) => args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Machine-readable records for translation tooling
    #[default]
    Json,
    /// Human-readable report with source context
    Text,
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Glob selecting files relative to DIR (overrides config file)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory name or glob to skip; may be repeated
    #[arg(short = 'e', long = "exclude")]
    pub excludes: Vec<String>,

    /// Exclusion dictionary loaded after the configured ones; may be repeated
    #[arg(short = 'd', long = "exclusion-dict")]
    pub exclusion_dicts: Vec<PathBuf>,

    /// Minimum UTF-8 byte length of an extracted string
    #[arg(long)]
    pub min_bytes: Option<usize>,

    /// Context window size in lines (odd, 0 disables)
    #[arg(long)]
    pub context_lines: Option<usize>,

    /// Maximum records per output file
    #[arg(long)]
    pub split_threshold: Option<usize>,

    /// Skip Blade templates
    #[arg(long)]
    pub no_templates: bool,

    /// Also scan plain PHP files
    #[arg(long)]
    pub scripts: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract hardcoded strings from Blade templates and PHP files
    Extract(ExtractArgs),
    /// Initialize a new .i18nrc.json configuration file
    Init,
}
