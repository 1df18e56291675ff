//! Parse JavaScript `<script>` bodies and locate their string literals.

use std::ops::Range;

use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, GLOBALS, Globals, SourceMap};
use swc_ecma_ast::{ExportAll, Expr, ExprStmt, ImportDecl, Lit, NamedExport, PropName, Str};
use swc_ecma_parser::{Parser, StringInput, Syntax};
use swc_ecma_visit::{Visit, VisitWith};

/// Collects the body span of every user-facing string literal.
///
/// Skipped: object-literal keys, import/export sources, and bare string
/// statements such as `"use strict"`.
struct StringLiteralCollector {
    base: BytePos,
    spans: Vec<Range<usize>>,
}

impl Visit for StringLiteralCollector {
    fn visit_str(&mut self, node: &Str) {
        let span = node.span;
        let lo = (span.lo.0 - self.base.0) as usize;
        let hi = (span.hi.0 - self.base.0) as usize;
        // Span covers the quotes
        if hi >= lo + 2 {
            self.spans.push(lo + 1..hi - 1);
        }
    }

    fn visit_prop_name(&mut self, node: &PropName) {
        if let PropName::Computed(computed) = node {
            computed.visit_with(self);
        }
    }

    fn visit_expr_stmt(&mut self, node: &ExprStmt) {
        if !matches!(&*node.expr, Expr::Lit(Lit::Str(_))) {
            node.visit_children_with(self);
        }
    }

    fn visit_import_decl(&mut self, _: &ImportDecl) {}

    fn visit_named_export(&mut self, _: &NamedExport) {}

    fn visit_export_all(&mut self, _: &ExportAll) {}
}

/// Parse a script body and return the byte ranges (relative to `code`,
/// quotes excluded) of its string literals, in source order.
pub fn string_literal_spans(code: &str, file_path: &str) -> Result<Vec<Range<usize>>> {
    GLOBALS.set(&Globals::new(), || {
        let source_map = SourceMap::default();
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.to_string());

        let mut parser = Parser::new(
            Syntax::Es(Default::default()),
            StringInput::from(&*source_file),
            None,
        );
        let program = parser
            .parse_program()
            .map_err(|e| anyhow!("Failed to parse script block: {:?}", e))?;

        let mut collector = StringLiteralCollector {
            base: source_file.start_pos,
            spans: Vec::new(),
        };
        program.visit_with(&mut collector);

        let mut spans = collector.spans;
        spans.sort_by_key(|r| r.start);
        Ok(spans)
    })
}
