//! Template substitution for run-scoped state values.
//!
//! Placeholders use `{name}` syntax; `{{` and `}}` are escapes for literal
//! braces. Substitution is a pure function of the template and the mapping,
//! and fails before any partial output is used.

use std::collections::HashMap;

use crate::error::{BackendError, Result};

/// Substitute every `{key}` placeholder in a template from the mapping.
///
/// `target` is the state key being computed and only appears in error
/// messages. A placeholder with no mapping entry fails with the missing key
/// and the sorted set of available keys.
pub fn substitute(
    template: &str,
    values: &HashMap<String, String>,
    target: &str,
) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if let Some(&'{') = chars.peek() {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut key = String::new();
                let mut closed = false;
                for k in chars.by_ref() {
                    if k == '}' {
                        closed = true;
                        break;
                    }
                    key.push(k);
                }
                if !closed {
                    return Err(BackendError::UnterminatedPlaceholder {
                        target: target.to_string(),
                    });
                }
                match values.get(&key) {
                    Some(v) => out.push_str(v),
                    None => {
                        let mut available: Vec<String> = values.keys().cloned().collect();
                        available.sort();
                        return Err(BackendError::MissingSubstitutionKey {
                            missing: key,
                            target: target.to_string(),
                            available,
                        });
                    }
                }
            }
            '}' => {
                if let Some(&'}') = chars.peek() {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitutes_placeholders() {
        let out = substitute(
            "table_{region}_{version}",
            &values(&[("region", "eu_west_1"), ("version", "2_0")]),
            "table_name",
        )
        .unwrap();
        assert_eq!(out, "table_eu_west_1_2_0");
    }

    #[test]
    fn test_missing_key_reports_target_and_available() {
        let err = substitute("{region}", &values(&[("version", "2_0")]), "table_name")
            .unwrap_err();
        assert_eq!(
            err,
            BackendError::MissingSubstitutionKey {
                missing: "region".to_string(),
                target: "table_name".to_string(),
                available: vec!["version".to_string()],
            }
        );
    }

    #[test]
    fn test_brace_escapes() {
        let out = substitute("{{literal}} {key}", &values(&[("key", "v")]), "k").unwrap();
        assert_eq!(out, "{literal} v");
    }

    #[test]
    fn test_unterminated_placeholder_rejected() {
        let err = substitute("{open", &values(&[]), "k").unwrap_err();
        assert_eq!(
            err,
            BackendError::UnterminatedPlaceholder {
                target: "k".to_string()
            }
        );
    }

    #[test]
    fn test_deterministic() {
        let map = values(&[("a", "1"), ("b", "2")]);
        let first = substitute("{a}-{b}", &map, "k").unwrap();
        let second = substitute("{a}-{b}", &map, "k").unwrap();
        assert_eq!(first, second);
    }
}
