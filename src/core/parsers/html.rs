use anyhow::{Result, anyhow};
use tree_sitter::{Parser, Tree};

/// Parse markup into a concrete syntax tree.
///
/// tree-sitter recovers from malformed input, so this only fails if the
/// grammar cannot be loaded.
pub fn parse_html(code: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_html::LANGUAGE.into())
        .map_err(|e| anyhow!("Failed to set parser language for HTML: {}", e))?;

    parser
        .parse(code, None)
        .ok_or_else(|| anyhow!("Failed to parse template markup"))
}
