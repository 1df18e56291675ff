use regex::Regex;

/// Check if a pattern uses glob syntax (`*` or a `[...]` class).
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || has_char_class(pattern)
}

fn has_char_class(pattern: &str) -> bool {
    pattern
        .find('[')
        .is_some_and(|open| pattern[open + 1..].contains(']'))
}

/// Translate a glob into an equivalent regex source, anchored at both ends.
///
/// - `*` matches any run of zero or more characters
/// - `[...]` matches one character from the set or range; an unterminated `[`
///   is a literal
/// - every other character, `?` included, matches itself
pub fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push('^');

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => out.push_str(".*"),
            '[' => match chars[i + 1..].iter().position(|&c| c == ']') {
                Some(rel) => {
                    let close = i + 1 + rel;
                    out.push('[');
                    for (j, &c) in chars[i + 1..close].iter().enumerate() {
                        // Ranges and a leading `^` keep their meaning
                        if matches!(c, '\\' | '[' | '&' | '~') || (c == '^' && j > 0) {
                            out.push('\\');
                        }
                        out.push(c);
                    }
                    out.push(']');
                    i = close;
                }
                None => out.push_str(r"\["),
            },
            c => out.push_str(&regex::escape(&c.to_string())),
        }
        i += 1;
    }

    out.push('$');
    out
}

/// Compile a glob into a whole-string matcher.
pub fn compile_glob(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&glob_to_regex(pattern))
}
