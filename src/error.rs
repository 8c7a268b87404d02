//! Error types for the Athena translation backend.
//!
//! Every failure is a deterministic function of input shape; errors are
//! fatal to the single condition or state assignment that raised them and
//! propagate to the caller.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BackendError>;

#[derive(Debug, Error, PartialEq)]
pub enum BackendError {
    /// `re` combined with any other modifier
    #[error("Regular expression modifier only applicable to unmodified values")]
    RegexWithModifiers,

    /// `cased` combined with `fieldref`
    #[error("cased is not support with fieldref for this backend at present")]
    CasedFieldref,

    /// More than one shape-selecting modifier on the same value
    #[error("unsupported modifier combination: {first} and {second}")]
    ConflictingModifiers {
        first: &'static str,
        second: &'static str,
    },

    /// `fieldref` value that is not a field name
    #[error("fieldref value must be a field name, got {got}")]
    FieldrefValue { got: &'static str },

    /// `re` value that is not a string
    #[error("regular expression pattern must be a string, got {got}")]
    RegexValue { got: &'static str },

    /// Condition with an empty value list
    #[error("leaf condition has no values")]
    EmptyValues,

    /// Template placeholder with no entry in the merged mapping
    #[error(
        "Missing key '{missing}' in template substitution for '{target}'. \
         Available keys: {available:?}. \
         You likely need to set the key '{missing}' via 'backend options'."
    )]
    MissingSubstitutionKey {
        missing: String,
        target: String,
        available: Vec<String>,
    },

    /// Template with an unclosed `{` placeholder
    #[error("unterminated placeholder in template substitution for '{target}'")]
    UnterminatedPlaceholder { target: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message_names_key_target_and_available() {
        let err = BackendError::MissingSubstitutionKey {
            missing: "backend_aws_table_region".to_string(),
            target: "table_name".to_string(),
            available: vec!["backend_aws_table_version".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Missing key 'backend_aws_table_region'"));
        assert!(msg.contains("for 'table_name'"));
        assert!(msg.contains("backend_aws_table_version"));
        assert!(msg.contains("backend options"));
    }

    #[test]
    fn test_modifier_error_messages() {
        assert_eq!(
            BackendError::RegexWithModifiers.to_string(),
            "Regular expression modifier only applicable to unmodified values"
        );
        assert_eq!(
            BackendError::CasedFieldref.to_string(),
            "cased is not support with fieldref for this backend at present"
        );
    }
}
