//! Field identifier resolution.
//!
//! Maps a logical field name to a SQL column reference: a dotted column path
//! with per-segment quoting for mapped fields, or an element_at accessor
//! into the configured key-value container for unmapped fields.

use crate::config::BackendConfig;
use crate::models::FieldRef;

use super::escape::quote_str;

/// Resolve a field reference into a SQL expression string.
///
/// A field whose first unescaped segment is a configured container column is
/// addressed as `element_at(<container>, '<rest of path>')`, with the
/// remaining segments joined back with literal dots inside the string
/// literal. Every other field is a column path; segments that are not legal
/// bare identifiers are double-quoted, so an escaped dot in the source name
/// ends up inside a quoted sub-identifier.
pub fn resolve(field: &FieldRef, config: &BackendConfig) -> String {
    let segments = field.segments();

    if field.is_unmapped(config) {
        let path = segments[1..].join(".");
        return format!("element_at({}, {})", quote_ident(&segments[0]), quote_str(&path));
    }

    segments
        .iter()
        .map(|s| quote_ident(s))
        .collect::<Vec<_>>()
        .join(".")
}

/// Emit one identifier segment, double-quoting it unless it is a legal bare
/// identifier. Embedded double quotes are doubled.
fn quote_ident(segment: &str) -> String {
    if is_bare_identifier(segment) {
        segment.to_string()
    } else {
        format!("\"{}\"", segment.replace('"', "\"\""))
    }
}

fn is_bare_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
