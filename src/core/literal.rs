//! Regex primitives for quoted string literals.
//!
//! Preference declarations quote their name argument (and usually their value)
//! with either quote style, and a literal quote character is escaped with a
//! preceding backslash. The fragments here are spliced into the larger call
//! patterns in [`crate::core::extract`].

use regex::Captures;

/// Matches a complete quoted literal of either quote style without capturing
/// its content. Escaped quotes do not terminate the literal.
pub const QUOTED: &str = r#"(?:'(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*")"#;

/// Capturing variant of [`QUOTED`]. Adds exactly two capture slots to the
/// enclosing pattern: the first for single-quoted inner text, the second for
/// double-quoted inner text. Only one of them participates in any match.
pub const QUOTED_CAPTURE: &str = r#"(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")"#;

/// Returns the inner text of a literal matched through [`QUOTED_CAPTURE`],
/// given the group numbers the two slots ended up with in the enclosing
/// pattern.
pub fn captured_inner<'t>(caps: &Captures<'t>, single: usize, double: usize) -> &'t str {
    caps.get(single)
        .or_else(|| caps.get(double))
        .map(|m| m.as_str())
        .unwrap_or("")
}

/// Resolves backslash escapes: `\x` becomes `x` for any `x`.
///
/// Used on the name argument only; value strings keep their escapes so that
/// extraction round-trips the inner text losslessly.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}
