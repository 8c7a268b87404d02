//! SQL literal escaping and wildcard translation.
//!
//! Pattern bodies are escaped for the LIKE metacharacters before the
//! condition's generic wildcards are re-inserted, so a literal `%`, `_` or
//! `\` in the source value survives the translation backslash-escaped.

use super::modifiers::ComparisonShape;

/// Escape-character declaration suffixed to every LIKE predicate
pub const LIKE_ESCAPE_CLAUSE: &str = r"ESCAPE '\'";

/// Quote a string literal for SQL, doubling embedded single quotes
pub fn quote_str(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Escape LIKE metacharacters in a literal and translate the generic
/// wildcards: `*` to `%` and `?` to `_`.
pub fn escape_pattern_body(literal: &str) -> String {
    let mut body = String::with_capacity(literal.len());
    for c in literal.chars() {
        match c {
            '\\' => body.push_str(r"\\"),
            '%' => body.push_str(r"\%"),
            '_' => body.push_str(r"\_"),
            '*' => body.push('%'),
            '?' => body.push('_'),
            _ => body.push(c),
        }
    }
    body
}

/// Bracket an escaped pattern body according to the comparison shape
pub fn bracket(body: &str, shape: ComparisonShape) -> String {
    match shape {
        ComparisonShape::Contains => format!("%{}%", body),
        ComparisonShape::StartsWith => format!("{}%", body),
        ComparisonShape::EndsWith => format!("%{}", body),
        _ => body.to_string(),
    }
}
