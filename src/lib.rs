//! i18n-refactor - hardcoded string extraction for Laravel projects
//!
//! Finds user-facing text in Blade templates and PHP sources that has not yet
//! been moved into translation files, and reports every occurrence with its
//! line, column and surrounding context.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (discovery, extractors, filters, consolidation)
//! - `json_writer`: JSON serialization and split output files
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod json_writer;
pub mod utils;
