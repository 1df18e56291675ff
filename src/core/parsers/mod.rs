//! Parsers for the markup and script languages found in templates.
//!
//! This module provides:
//! - `html`: Markup parsing with tree-sitter (byte spans, error-tolerant)
//! - `js`: `<script>` body parsing with swc

pub mod html;
pub mod js;
