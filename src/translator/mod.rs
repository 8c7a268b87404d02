//! Condition-to-predicate translation engine.
//!
//! Compiles one leaf condition (field reference + modifier stack + values +
//! negation flag) into an Athena SQL boolean expression fragment. Combining
//! fragments with AND/OR and substituting the table placeholder are owned by
//! the caller.

mod escape;
mod identifier;
mod modifiers;

pub use modifiers::{ComparisonShape, ResolvedModifiers};

use regex::Regex;
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::error::{BackendError, Result};
use crate::models::{ConditionValue, FieldRef, LeafCondition};

use escape::{bracket, escape_pattern_body, quote_str, LIKE_ESCAPE_CLAUSE};

/// Condition-to-predicate translator for the Athena SQL dialect.
///
/// Holds only configuration; translation is pure per condition, so one
/// translator can compile independent conditions concurrently.
pub struct Translator {
    config: BackendConfig,
}

impl Translator {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Compile a single leaf condition into a SQL boolean expression.
    ///
    /// The identifier is resolved once; each value produces one
    /// sub-predicate; sub-predicates are OR-joined in input order; negation
    /// wraps the joined result exactly once.
    pub fn translate(&self, condition: &LeafCondition) -> Result<String> {
        if condition.values.is_empty() {
            return Err(BackendError::EmptyValues);
        }

        let resolved = modifiers::resolve(&condition.modifiers)?;
        let ident = identifier::resolve(&condition.field, &self.config);

        let mut terms = Vec::with_capacity(condition.values.len());
        for value in &condition.values {
            terms.push(self.translate_value(&ident, value, resolved)?);
        }
        let joined = terms.join(" OR ");

        let sql = if condition.negated {
            // Negation is never distributed onto sub-terms; a multi-term OR
            // group needs parentheses to keep the NOT over the whole group
            if terms.len() > 1 {
                format!("NOT ({})", joined)
            } else {
                format!("NOT {}", joined)
            }
        } else {
            joined
        };

        debug!(
            field = %condition.field.name,
            shape = ?resolved.shape,
            values = condition.values.len(),
            "Compiled leaf condition"
        );
        Ok(sql)
    }

    fn translate_value(
        &self,
        ident: &str,
        value: &ConditionValue,
        resolved: ResolvedModifiers,
    ) -> Result<String> {
        match resolved.shape {
            ComparisonShape::Equality => Ok(self.equality(ident, value, resolved.case_sensitive)),
            ComparisonShape::FieldEquality => self.field_equality(ident, value),
            ComparisonShape::Regex => self.regex_predicate(ident, value),
            shape => Ok(self.pattern(ident, value, shape, resolved.case_sensitive)),
        }
    }

    /// Plain equality. Strings case-fold both sides unless `cased`; numbers
    /// and booleans compare bare; null becomes IS NULL.
    fn equality(&self, ident: &str, value: &ConditionValue, cased: bool) -> String {
        match value {
            ConditionValue::Null => format!("{} IS NULL", ident),
            ConditionValue::Bool(b) => {
                format!("{} = {}", ident, if *b { "TRUE" } else { "FALSE" })
            }
            ConditionValue::Int(n) => format!("{} = {}", ident, n),
            ConditionValue::Float(n) => format!("{} = {}", ident, n),
            ConditionValue::Str(s) => {
                if cased {
                    format!("{} = {}", ident, quote_str(s))
                } else {
                    format!("LOWER({}) = LOWER({})", ident, quote_str(s))
                }
            }
        }
    }

    /// LIKE pattern match for contains/startswith/endswith.
    fn pattern(
        &self,
        ident: &str,
        value: &ConditionValue,
        shape: ComparisonShape,
        cased: bool,
    ) -> String {
        let mut body = escape_pattern_body(&value.pattern_text());
        if !cased {
            body = body.to_lowercase();
        }
        let literal = quote_str(&bracket(&body, shape));

        if cased {
            format!("{} LIKE {} {}", ident, literal, LIKE_ESCAPE_CLAUSE)
        } else {
            format!("LOWER({}) LIKE {} {}", ident, literal, LIKE_ESCAPE_CLAUSE)
        }
    }

    /// Field-to-field equality. Case-insensitive only; the value names the
    /// other field and is resolved like any field reference.
    fn field_equality(&self, ident: &str, value: &ConditionValue) -> Result<String> {
        let other = match value {
            ConditionValue::Str(s) => identifier::resolve(&FieldRef::new(s.clone()), &self.config),
            other => {
                return Err(BackendError::FieldrefValue {
                    got: other.type_name(),
                })
            }
        };
        Ok(format!("LOWER({}) = LOWER({})", ident, other))
    }

    /// Regular expression predicate. The pattern is checked for diagnostics
    /// only; Athena's Java regex dialect accepts patterns this crate's regex
    /// engine rejects, so emission proceeds either way.
    fn regex_predicate(&self, ident: &str, value: &ConditionValue) -> Result<String> {
        let pattern = match value {
            ConditionValue::Str(s) => s,
            other => {
                return Err(BackendError::RegexValue {
                    got: other.type_name(),
                })
            }
        };
        if Regex::new(pattern).is_err() {
            warn!(pattern = %pattern, "Regex pattern did not compile locally");
        }
        Ok(format!("REGEXP_LIKE({}, {})", ident, quote_str(pattern)))
    }
}
