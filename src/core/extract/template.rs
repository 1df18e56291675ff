//! Text extraction from Blade templates.
//!
//! Blade regions are located first (see [`super::blade`]); the markup is then
//! parsed with tree-sitter and every candidate node is checked against those
//! regions by byte span. Nothing is ever masked or rewritten, so offsets stay
//! valid for the original content.
//!
//! Candidates:
//! - text runs (consecutive text and entity nodes), one per non-blank line
//! - values of the configured attributes
//! - string literals in `<script>` bodies
//! - PHP literals inside `@php` / `<?php` blocks, via the script extractor

use std::ops::Range;

use anyhow::Result;
use tree_sitter::Node;

use super::{
    blade::{self, BladeRegions},
    script,
};
use crate::core::{
    data::RawHit,
    parsers::{html::parse_html, js},
    position::trim_span,
    utils::{Dialect, string_literals},
};

struct TemplateWalker<'a> {
    content: &'a str,
    regions: &'a BladeRegions,
    checked_attributes: &'a [String],
    hits: Vec<RawHit>,
}

/// Extract candidate strings from a template, in document order.
pub fn extract(content: &str, checked_attributes: &[String]) -> Result<Vec<RawHit>> {
    let regions = blade::scan(content);
    let tree = parse_html(content)?;

    let mut walker = TemplateWalker {
        content,
        regions: &regions,
        checked_attributes,
        hits: Vec::new(),
    };
    walker.visit(tree.root_node());

    let mut hits = walker.hits;
    for block in &regions.php_blocks {
        hits.extend(script::extract_range(content, block.clone()));
    }
    hits.sort_by_key(|h| h.offset);
    Ok(hits)
}

impl TemplateWalker<'_> {
    fn visit(&mut self, node: Node) {
        match node.kind() {
            "comment" | "style_element" => return,
            "script_element" => return self.visit_script(node),
            "attribute" => return self.visit_attribute(node),
            _ => {}
        }

        let mut cursor = node.walk();
        let mut run: Option<Range<usize>> = None;
        for child in node.children(&mut cursor) {
            if matches!(child.kind(), "text" | "entity") {
                run = Some(match run {
                    Some(r) => r.start..child.end_byte(),
                    None => child.byte_range(),
                });
                continue;
            }
            if let Some(r) = run.take() {
                self.text_run(r);
            }
            self.visit(child);
        }
        if let Some(r) = run {
            self.text_run(r);
        }
    }

    /// Each non-blank line of a text run is its own candidate.
    fn text_run(&mut self, range: Range<usize>) {
        let content = self.content;
        let mut line_start = range.start;
        for line in content[range].split('\n') {
            self.candidate(line_start..line_start + line.len());
            line_start += line.len() + 1;
        }
    }

    fn visit_attribute(&mut self, node: Node) {
        let content = self.content;
        let mut name = None;
        let mut value = None;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "attribute_name" => name = Some(&content[child.byte_range()]),
                "attribute_value" => value = Some(child.byte_range()),
                "quoted_attribute_value" => {
                    let mut inner = child.walk();
                    value = child
                        .children(&mut inner)
                        .find(|c| c.kind() == "attribute_value")
                        .map(|c| c.byte_range());
                }
                _ => {}
            }
        }

        let checked = name.is_some_and(|name| {
            self.checked_attributes
                .iter()
                .any(|a| a.eq_ignore_ascii_case(name))
        });
        if let (true, Some(value)) = (checked, value) {
            self.candidate(value);
        }
    }

    fn visit_script(&mut self, node: Node) {
        let mut cursor = node.walk();
        let Some(body) = node
            .children(&mut cursor)
            .find(|c| c.kind() == "raw_text")
            .map(|c| c.byte_range())
        else {
            return;
        };

        let content = self.content;
        let code = &content[body.clone()];
        // Blade inside a script body usually breaks the parse
        let literals = js::string_literal_spans(code, "<script>").unwrap_or_else(|_| {
            string_literals(code, 0..code.len(), Dialect::Js)
                .into_iter()
                .map(|l| l.body)
                .collect()
        });

        for literal in literals {
            self.candidate(body.start + literal.start..body.start + literal.end);
        }
    }

    /// Trim the slice at `range` and keep it unless it touches a Blade region.
    fn candidate(&mut self, range: Range<usize>) {
        let content = self.content;
        let Some((text, offset)) = trim_span(&content[range.clone()], range.start) else {
            return;
        };
        let hit = RawHit::new(text, offset);
        if !self.regions.excluded.overlaps(&(hit.offset..hit.end())) {
            self.hits.push(hit);
        }
    }
}
