//! Processing pipeline state.
//!
//! Run-scoped key-value state is populated once per compilation run, before
//! any leaf condition is compiled, and is read-only afterwards. Downstream
//! steps read it by key (e.g. the resolved table name consumed by query
//! templating). Transformations take the state and the backend options as
//! explicit parameters; there is no ambient pipeline object.

mod template;

pub use template::substitute;

use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;

/// Run-scoped key-value state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineState {
    entries: HashMap<String, String>,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Computes one state value from a template and the backend options.
///
/// Default values merge under the run options (options win on key
/// collision); the substituted result is written into the pipeline state at
/// `key`. Re-applying with the same inputs writes the same value.
#[derive(Debug, Clone, Default)]
pub struct SetStateFromOptions {
    /// State key to write
    pub key: String,
    /// Template with `{name}` placeholders
    pub template: String,
    /// Defaults overridable by backend options
    pub default_values: HashMap<String, String>,
    /// Replace every `-` with `_` after substitution, for values embedded
    /// in identifiers where `-` is illegal
    pub dash_to_underscore: bool,
}

impl SetStateFromOptions {
    /// Apply the transformation, writing the computed value into `state`.
    ///
    /// A missing placeholder key fails before anything is written.
    pub fn apply(
        &self,
        state: &mut PipelineState,
        options: &HashMap<String, String>,
    ) -> Result<()> {
        let mut values = self.default_values.clone();
        values.extend(options.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut value = template::substitute(&self.template, &values, &self.key)?;
        if self.dash_to_underscore {
            value = value.replace('-', "_");
        }

        debug!(key = %self.key, value = %value, "Set pipeline state");
        state.set(self.key.clone(), value);
        Ok(())
    }
}
