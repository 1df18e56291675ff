//! Byte-level scanning helpers for C-like code (PHP, JavaScript).
//!
//! None of these build a syntax tree; they only know enough about quotes and
//! comments to avoid mistaking their contents for code.

use std::ops::Range;

/// Comment syntax of the code being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `//`, `/* */` and `#` comments.
    Php,
    /// `//` and `/* */` comments.
    Js,
}

/// A quoted string literal found in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// Opening quote character.
    pub quote: u8,
    /// Byte range of the literal body, quotes excluded.
    pub body: Range<usize>,
}

impl Literal {
    /// Byte offset of the opening quote.
    pub fn start(&self) -> usize {
        self.body.start - 1
    }

    /// Byte offset just past the closing quote.
    pub fn end(&self) -> usize {
        self.body.end + 1
    }
}

pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// If a comment starts at `i`, return the offset just past it.
///
/// Unterminated comments run to the end of input.
pub fn skip_comment(bytes: &[u8], i: usize, dialect: Dialect) -> Option<usize> {
    match (bytes.get(i), bytes.get(i + 1)) {
        (Some(b'/'), Some(b'*')) => Some(
            find_bytes(bytes, i + 2, b"*/")
                .map(|end| end + 2)
                .unwrap_or(bytes.len()),
        ),
        (Some(b'/'), Some(b'/')) => Some(line_end(bytes, i + 2)),
        (Some(b'#'), _) if dialect == Dialect::Php => Some(line_end(bytes, i + 1)),
        _ => None,
    }
}

/// Given the offset of an opening quote, return the offset just past the
/// matching closing quote. Backslash escapes are honoured. Unterminated
/// strings return `None`.
pub fn skip_string(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = *bytes.get(start)?;
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Find the delimiter that closes the one at `open_pos` (`(`, `[` or `{`),
/// skipping nested pairs, string literals and comments.
pub fn find_matching(content: &str, open_pos: usize, dialect: Dialect) -> Option<usize> {
    let bytes = content.as_bytes();
    let open = *bytes.get(open_pos)?;
    let close = match open {
        b'(' => b')',
        b'[' => b']',
        b'{' => b'}',
        _ => return None,
    };

    let mut depth = 1usize;
    let mut i = open_pos + 1;
    while i < bytes.len() {
        if let Some(next) = skip_comment(bytes, i, dialect) {
            i = next;
            continue;
        }
        match bytes[i] {
            b'"' | b'\'' | b'`' => {
                i = skip_string(bytes, i)?;
                continue;
            }
            b if b == open => depth += 1,
            b if b == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Iterate over the single- and double-quoted string literals in
/// `content[range]`, skipping comments.
pub fn string_literals(content: &str, range: Range<usize>, dialect: Dialect) -> Vec<Literal> {
    let bytes = content.as_bytes();
    let end = range.end.min(bytes.len());
    let mut literals = Vec::new();
    let mut i = range.start;

    while i < end {
        if let Some(next) = skip_comment(&bytes[..end], i, dialect) {
            i = next;
            continue;
        }
        let b = bytes[i];
        if b == b'"' || b == b'\'' {
            match skip_string(&bytes[..end], i) {
                Some(next) => {
                    literals.push(Literal {
                        quote: b,
                        body: i + 1..next - 1,
                    });
                    i = next;
                }
                // Unterminated literal: nothing after it can be trusted
                None => break,
            }
            continue;
        }
        i += 1;
    }
    literals
}

/// Copy `content[range]` with every comment and quoted string blanked to
/// spaces. Newlines survive and byte offsets are unchanged, so keyword
/// searches on the copy only ever see code.
pub fn code_only(content: &str, range: Range<usize>, dialect: Dialect) -> String {
    let bytes = content.as_bytes();
    let end = range.end.min(bytes.len());
    let start = range.start.min(end);
    let bytes = &bytes[..end];
    let mut out = bytes[start..].to_vec();

    let mut i = start;
    while i < end {
        let skipped = match bytes[i] {
            b'"' | b'\'' => Some(skip_string(bytes, i).unwrap_or(end).min(end)),
            _ => skip_comment(bytes, i, dialect),
        };
        let Some(next) = skipped else {
            i += 1;
            continue;
        };
        out[i - start..next - start]
            .iter_mut()
            .filter(|b| **b != b'\n')
            .for_each(|b| *b = b' ');
        i = next;
    }

    // Blanked spans start and end on ASCII delimiters, so this never replaces
    String::from_utf8_lossy(&out).into_owned()
}

fn find_bytes(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if from >= bytes.len() {
        return None;
    }
    bytes[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

fn line_end(bytes: &[u8], from: usize) -> usize {
    bytes[from.min(bytes.len())..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|p| p + from + 1)
        .unwrap_or(bytes.len())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bodies<'a>(content: &'a str, dialect: Dialect) -> Vec<&'a str> {
        string_literals(content, 0..content.len(), dialect)
            .into_iter()
            .map(|l| &content[l.body])
            .collect()
    }

    #[test]
    fn test_string_literals_both_quotes() {
        let code = r#"$a = 'one'; $b = "two";"#;
        assert_eq!(bodies(code, Dialect::Php), vec!["one", "two"]);
    }

    #[test]
    fn test_string_literals_escaped_quotes() {
        let code = r#"$a = 'it\'s'; $b = "say \"hi\"";"#;
        assert_eq!(bodies(code, Dialect::Php), vec![r"it\'s", r#"say \"hi\""#]);
    }

    #[test]
    fn test_string_literals_skip_comments() {
        let code = "// 'not this'\n/* \"nor this\" */\n# 'or this'\n$x = 'yes';";
        assert_eq!(bodies(code, Dialect::Php), vec!["yes"]);
    }

    #[test]
    fn test_hash_is_not_a_comment_in_js() {
        let code = "this.#count = 'value';";
        assert_eq!(bodies(code, Dialect::Js), vec!["value"]);
        assert_eq!(bodies(code, Dialect::Php), Vec::<&str>::new());
    }

    #[test]
    fn test_string_literals_unterminated() {
        let code = "$a = 'ok'; $b = 'broken";
        assert_eq!(bodies(code, Dialect::Php), vec!["ok"]);
    }

    #[test]
    fn test_literal_offsets() {
        let code = "x('ab')";
        let lits = string_literals(code, 0..code.len(), Dialect::Php);
        assert_eq!(lits[0].start(), 2);
        assert_eq!(lits[0].body, 3..5);
        assert_eq!(lits[0].end(), 6);
    }

    #[test]
    fn test_find_matching_nested() {
        let code = "f(a(b), ')', \"(\") + 1";
        assert_eq!(find_matching(code, 1, Dialect::Php), Some(16));
    }

    #[test]
    fn test_find_matching_unclosed() {
        assert_eq!(find_matching("f(a(b)", 1, Dialect::Php), None);
        assert_eq!(find_matching("abc", 1, Dialect::Php), None);
    }

    #[test]
    fn test_find_matching_reports_open_call() {
        // The literal that follows is still inside `info(`
        assert_eq!(find_matching("Log::info(foo(1), ", 9, Dialect::Php), None);
        assert_eq!(find_matching("__('x'); bar(", 2, Dialect::Php), Some(6));
    }

    #[test]
    fn test_code_only_blanks_comments_and_strings() {
        let code = "/** echo */\n$a = 'route(x'; # print\nfoo(\";\");";
        assert_eq!(
            code_only(code, 0..code.len(), Dialect::Php),
            "           \n$a =          ;        \nfoo(   );"
        );
    }

    #[test]
    fn test_code_only_keeps_offsets_with_unicode() {
        let code = "x('日本語'); y(";
        let masked = code_only(code, 2..code.len(), Dialect::Php);
        assert_eq!(masked.len(), code.len() - 2);
        assert_eq!(&masked[masked.len() - 5..], "); y(");
        assert!(masked.starts_with("   "));
    }

    #[test]
    fn test_code_only_unterminated_runs_to_end() {
        let code = "a(); /* open 'x'\nb(";
        assert_eq!(code_only(code, 0..code.len(), Dialect::Php), "a();            \n  ");
    }
}
