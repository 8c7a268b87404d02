//! Data models module
//!
//! Defines the leaf condition structures handed over by the rule parser:
//! field references, modifier stacks, and match values. A leaf condition is
//! one field/value match clause prior to boolean combination; the parser
//! normalizes rule syntax into these structures and the translator consumes
//! them once.

use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;

/// A logical field reference as written in a detection rule.
///
/// Unescaped dots separate container path segments; a backslash-escaped dot
/// (`\.`) is a literal character inside one segment, not a separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRef {
    /// Raw field name (e.g. `unmapped.serviceEventDetails.account_id`)
    pub name: String,
}

impl FieldRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Split the field name into path segments on unescaped dots.
    ///
    /// An escaped dot is un-escaped to a literal dot within its segment;
    /// any other backslash is kept as-is.
    pub fn segments(&self) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = self.name.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(&'.') = chars.peek() {
                    // Escaped dot: literal character, consume both
                    current.push('.');
                    chars.next();
                } else {
                    current.push('\\');
                }
            } else if c == '.' {
                segments.push(std::mem::take(&mut current));
            } else {
                current.push(c);
            }
        }
        segments.push(current);
        segments
    }

    /// Whether this field is addressed through the generic key-value
    /// container instead of a concrete column.
    ///
    /// True when the first path segment is one of the configured
    /// `element_at` container fields and a path follows it.
    pub fn is_unmapped(&self, config: &BackendConfig) -> bool {
        let segments = self.segments();
        segments.len() > 1 && config.element_at_fields.iter().any(|f| f == &segments[0])
    }
}

/// A match-shape, case, or type qualifier attached to a field-value pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Substring match
    Contains,
    /// Prefix match
    Startswith,
    /// Suffix match
    Endswith,
    /// Case-sensitive comparison
    Cased,
    /// Compare against another field instead of a literal
    Fieldref,
    /// Regular expression match
    Re,
}

impl Modifier {
    /// Modifier name as written in rule syntax
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Contains => "contains",
            Modifier::Startswith => "startswith",
            Modifier::Endswith => "endswith",
            Modifier::Cased => "cased",
            Modifier::Fieldref => "fieldref",
            Modifier::Re => "re",
        }
    }
}

/// A single match value from a rule clause.
///
/// Under the `fieldref` modifier a string value names another field; in
/// every other shape it is a literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ConditionValue {
    /// Literal text used as the body of a pattern match
    pub fn pattern_text(&self) -> String {
        match self {
            ConditionValue::Null => String::new(),
            ConditionValue::Bool(b) => b.to_string(),
            ConditionValue::Int(n) => n.to_string(),
            ConditionValue::Float(n) => n.to_string(),
            ConditionValue::Str(s) => s.clone(),
        }
    }

    /// Value kind for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            ConditionValue::Null => "null",
            ConditionValue::Bool(_) => "boolean",
            ConditionValue::Int(_) | ConditionValue::Float(_) => "number",
            ConditionValue::Str(_) => "string",
        }
    }
}

/// One field/value match clause prior to boolean combination.
///
/// Created per rule clause by the external parser, consumed once by the
/// translator, produces one SQL expression string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafCondition {
    /// Field the clause matches on
    pub field: FieldRef,
    /// Ordered modifier stack attached to the values
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Values matched under the same modifier stack, implicitly OR-combined
    pub values: Vec<ConditionValue>,
    /// Wrap the whole compiled expression in a single NOT
    #[serde(default)]
    pub negated: bool,
}

impl LeafCondition {
    pub fn new(
        field: impl Into<String>,
        modifiers: Vec<Modifier>,
        values: Vec<ConditionValue>,
    ) -> Self {
        Self {
            field: FieldRef::new(field),
            modifiers,
            values,
            negated: false,
        }
    }

    /// Same condition with the negation flag set
    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_plain() {
        let field = FieldRef::new("fieldA");
        assert_eq!(field.segments(), vec!["fieldA"]);
    }

    #[test]
    fn test_segments_dotted_path() {
        let field = FieldRef::new("unmapped.serviceEventDetails.account_id");
        assert_eq!(
            field.segments(),
            vec!["unmapped", "serviceEventDetails", "account_id"]
        );
    }

    #[test]
    fn test_segments_escaped_dot() {
        // actor.user\.uid is two segments, the second with a literal dot
        let field = FieldRef::new(r"actor.user\.uid");
        assert_eq!(field.segments(), vec!["actor", "user.uid"]);
    }

    #[test]
    fn test_segments_keeps_other_backslashes() {
        let field = FieldRef::new(r"path\name");
        assert_eq!(field.segments(), vec![r"path\name"]);
    }

    #[test]
    fn test_is_unmapped_uses_config_prefix() {
        let config = BackendConfig::default();
        assert!(FieldRef::new("unmapped.account_id").is_unmapped(&config));
        assert!(!FieldRef::new("actor.account_id").is_unmapped(&config));
        // The bare container column alone is a mapped reference
        assert!(!FieldRef::new("unmapped").is_unmapped(&config));
    }

    #[test]
    fn test_modifier_yaml_names() {
        let mods: Vec<Modifier> =
            serde_yaml::from_str("[contains, cased, fieldref, re, startswith, endswith]").unwrap();
        assert_eq!(
            mods,
            vec![
                Modifier::Contains,
                Modifier::Cased,
                Modifier::Fieldref,
                Modifier::Re,
                Modifier::Startswith,
                Modifier::Endswith,
            ]
        );
    }

    #[test]
    fn test_condition_value_yaml_types() {
        let values: Vec<ConditionValue> =
            serde_yaml::from_str(r#"[null, true, 42, 1.5, "text"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                ConditionValue::Null,
                ConditionValue::Bool(true),
                ConditionValue::Int(42),
                ConditionValue::Float(1.5),
                ConditionValue::Str("text".to_string()),
            ]
        );
    }

    #[test]
    fn test_leaf_condition_json_round_trip() {
        let condition = LeafCondition::new(
            "fieldA",
            vec![Modifier::Contains],
            vec![ConditionValue::Str("val".to_string()), ConditionValue::Int(7)],
        )
        .negated();
        let json = serde_json::to_string(&condition).unwrap();
        let back: LeafCondition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, condition);
    }

    #[test]
    fn test_leaf_condition_from_yaml() {
        let condition: LeafCondition = serde_yaml::from_str(
            r#"
field: fieldA
modifiers: [cased, contains]
values: [SubString]
"#,
        )
        .unwrap();
        assert_eq!(condition.field.name, "fieldA");
        assert_eq!(condition.modifiers, vec![Modifier::Cased, Modifier::Contains]);
        assert_eq!(
            condition.values,
            vec![ConditionValue::Str("SubString".to_string())]
        );
        assert!(!condition.negated);
    }
}
