//! Modifier stack resolution.
//!
//! Collapses the ordered modifier stack of a leaf condition into one
//! comparison shape plus a case policy, rejecting unsupported combinations
//! before any SQL is emitted.

use crate::error::{BackendError, Result};
use crate::models::Modifier;

/// Resolved kind of SQL comparison for one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonShape {
    /// Plain equality
    Equality,
    /// Substring match, bracketed %...%
    Contains,
    /// Prefix match, bracketed ...%
    StartsWith,
    /// Suffix match, bracketed %...
    EndsWith,
    /// Equality against another field
    FieldEquality,
    /// Regular expression predicate
    Regex,
}

/// Comparison shape plus case policy for one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedModifiers {
    pub shape: ComparisonShape,
    /// True iff `cased` is present; default comparison case-folds both sides
    pub case_sensitive: bool,
}

/// Resolve a modifier stack into a comparison shape and case policy.
///
/// Precedence: `re`, then `fieldref`, then a single pattern modifier, then
/// plain equality. Incompatible stacks fail here, never downstream.
pub fn resolve(modifiers: &[Modifier]) -> Result<ResolvedModifiers> {
    let cased = modifiers.contains(&Modifier::Cased);

    // `re` tolerates no other modifier, `cased` included
    if modifiers.contains(&Modifier::Re) {
        if modifiers.iter().any(|m| *m != Modifier::Re) {
            return Err(BackendError::RegexWithModifiers);
        }
        return Ok(ResolvedModifiers {
            shape: ComparisonShape::Regex,
            case_sensitive: true,
        });
    }

    // At most one shape-selecting modifier may be active per value
    let mut shape_mods: Vec<Modifier> = Vec::new();
    for m in modifiers {
        let selects_shape = matches!(
            m,
            Modifier::Contains | Modifier::Startswith | Modifier::Endswith | Modifier::Fieldref
        );
        if selects_shape && !shape_mods.contains(m) {
            shape_mods.push(*m);
        }
    }
    if shape_mods.len() > 1 {
        return Err(BackendError::ConflictingModifiers {
            first: shape_mods[0].as_str(),
            second: shape_mods[1].as_str(),
        });
    }

    let shape = match shape_mods.first() {
        Some(Modifier::Fieldref) => {
            if cased {
                return Err(BackendError::CasedFieldref);
            }
            ComparisonShape::FieldEquality
        }
        Some(Modifier::Contains) => ComparisonShape::Contains,
        Some(Modifier::Startswith) => ComparisonShape::StartsWith,
        Some(Modifier::Endswith) => ComparisonShape::EndsWith,
        _ => ComparisonShape::Equality,
    };

    Ok(ResolvedModifiers {
        shape,
        case_sensitive: cased,
    })
}
