//! Blade syntax regions inside a template.
//!
//! Scans the unmodified template once and records every byte range that
//! belongs to Blade or PHP rather than to the markup:
//!
//! - `{{-- --}}` and `<!-- -->` comments
//! - `{{ }}` and `{!! !!}` interpolations (translation calls, variables, any
//!   other expression)
//! - `@directive(...)`, parentheses matched by depth, and the argument-less
//!   directives in [`BARE_DIRECTIVES`]; any other `@word` is plain text
//! - `@php ... @endphp`, `<?php ... ?>` and `<?= ... ?>`
//!
//! The PHP bodies are kept separately so they can be scanned as script code.

use std::ops::Range;

use crate::core::utils::{Dialect, RangeSet, find_matching, is_word_byte};

/// Directives written without arguments (`@else`, `@csrf`, `@endforeach`).
pub const BARE_DIRECTIVES: &[&str] = &[
    "append", "auth", "break", "continue", "csrf", "default", "else", "empty",
    "endauth", "endcan", "endcanany", "endcannot", "endcomponent", "endempty",
    "endenv", "enderror", "endfor", "endforeach", "endforelse", "endfragment",
    "endguest", "endhasSection", "endif", "endisset", "endonce", "endphp",
    "endprepend", "endPrependOnce", "endproduction", "endpush", "endPushOnce",
    "endsection", "endsectionMissing", "endsession", "endslot", "endswitch",
    "endunless", "endverbatim", "endwhile", "guest", "livewireScripts",
    "livewireStyles", "once", "overwrite", "parent", "production", "show", "stop",
    "verbatim", "viteReactRefresh",
];

#[derive(Debug, Default)]
pub struct BladeRegions {
    /// Everything that is not markup.
    pub excluded: RangeSet,
    /// Bodies of `@php` and `<?php` blocks.
    pub php_blocks: Vec<Range<usize>>,
}

struct Scanner<'a> {
    content: &'a str,
    bytes: &'a [u8],
    excluded: Vec<Range<usize>>,
    php_blocks: Vec<Range<usize>>,
}

pub fn scan(content: &str) -> BladeRegions {
    let mut scanner = Scanner {
        content,
        bytes: content.as_bytes(),
        excluded: Vec::new(),
        php_blocks: Vec::new(),
    };
    scanner.run();

    BladeRegions {
        excluded: RangeSet::new(scanner.excluded),
        php_blocks: scanner.php_blocks,
    }
}

impl Scanner<'_> {
    fn run(&mut self) {
        let mut i = 0;
        while i < self.bytes.len() {
            i = match self.bytes[i] {
                b'{' => self.brace(i),
                b'<' => self.angle(i),
                b'@' => self.at_sign(i),
                _ => i + 1,
            };
        }
    }

    fn brace(&mut self, i: usize) -> usize {
        if self.starts_with(i, "{{--") {
            self.delimited(i, 4, "--}}")
        } else if self.starts_with(i, "{!!") {
            self.delimited(i, 3, "!!}")
        } else if self.starts_with(i, "{{") {
            self.delimited(i, 2, "}}")
        } else {
            i + 1
        }
    }

    fn angle(&mut self, i: usize) -> usize {
        if self.starts_with(i, "<!--") {
            self.delimited(i, 4, "-->")
        } else if self.starts_with(i, "<?php") {
            let end = self.delimited(i, 5, "?>");
            let body_end = if self.content[..end].ends_with("?>") {
                end - 2
            } else {
                end
            };
            self.php_blocks.push(i + 5..body_end);
            end
        } else if self.starts_with(i, "<?=") {
            self.delimited(i, 3, "?>")
        } else {
            i + 1
        }
    }

    fn at_sign(&mut self, i: usize) -> usize {
        // `user@example.com`
        if i > 0 && is_word_byte(self.bytes[i - 1]) {
            return i + 1;
        }
        match self.bytes.get(i + 1) {
            // `@@if` renders a literal `@if`
            Some(b'@') => return i + 2,
            // `@{{ }}` is left for the frontend; still not markup text
            Some(b'{') => return i + 1,
            _ => {}
        }

        let name_start = i + 1;
        let name_end = name_start
            + self.bytes[name_start..]
                .iter()
                .take_while(|&&b| is_word_byte(b))
                .count();
        if name_end == name_start || self.bytes[name_start].is_ascii_digit() {
            return i + 1;
        }

        let args_open = self.bytes[name_end..]
            .iter()
            .position(|&b| b != b' ' && b != b'\t')
            .map(|p| name_end + p)
            .filter(|&p| self.bytes[p] == b'(');

        let name = &self.content[name_start..name_end];
        let end = match args_open {
            Some(open) => find_matching(self.content, open, Dialect::Php)
                .map(|close| close + 1)
                .unwrap_or(name_end),
            None if name == "php" => return self.php_directive_block(i, name_end),
            None if BARE_DIRECTIVES.contains(&name) => name_end,
            // `@laravel`, `@username`: text
            None => return name_end,
        };
        self.excluded.push(i..end);
        end
    }

    fn php_directive_block(&mut self, start: usize, body_start: usize) -> usize {
        const END: &str = "@endphp";
        let (body_end, end) = match self.content[body_start..].find(END) {
            Some(p) => (body_start + p, body_start + p + END.len()),
            None => (self.bytes.len(), self.bytes.len()),
        };
        self.php_blocks.push(body_start..body_end);
        self.excluded.push(start..end);
        end
    }

    /// Exclude from `start` through the closing delimiter, or to the end of
    /// input if it never closes. Returns the offset after the region.
    fn delimited(&mut self, start: usize, open_len: usize, close: &str) -> usize {
        let end = self.content[start + open_len..]
            .find(close)
            .map(|p| start + open_len + p + close.len())
            .unwrap_or(self.bytes.len());
        self.excluded.push(start..end);
        end
    }

    fn starts_with(&self, i: usize, token: &str) -> bool {
        self.bytes[i..].starts_with(token.as_bytes())
    }
}
