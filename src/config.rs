//! Configuration module
//!
//! Provides structured configuration for the Athena translation backend.
//! Configuration can be loaded from:
//! 1. Default values (hardcoded)
//! 2. athena.toml file (optional)
//! 3. Environment variables with ATHENA__ prefix
//!
//! Example environment variable override:
//! ATHENA__TABLE_PLACEHOLDER=<MY_TABLE>

use serde::Deserialize;
use std::collections::HashMap;

/// Placeholder emitted in place of the target table until the external
/// table-name resolution step substitutes the real name.
pub const TABLE_PLACEHOLDER: &str = "<TABLE>";

/// Athena backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Container columns addressed via element_at instead of a concrete column
    pub element_at_fields: Vec<String>,
    /// Opaque placeholder the caller replaces with the resolved table name
    pub table_placeholder: String,
    /// Per-run backend options consumed by template substitution
    #[serde(default)]
    pub options: HashMap<String, String>,
}

impl BackendConfig {
    /// Load configuration from defaults, athena.toml, and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            // --- Defaults ---
            .set_default("element_at_fields", vec!["unmapped".to_string()])?
            .set_default("table_placeholder", TABLE_PLACEHOLDER)?
            // --- Sources ---
            .add_source(config::File::with_name("athena").required(false))
            .add_source(config::Environment::with_prefix("ATHENA").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Register a backend option, overriding defaults during template substitution
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.insert(key.into(), value.into());
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            element_at_fields: vec!["unmapped".to_string()],
            table_placeholder: TABLE_PLACEHOLDER.to_string(),
            options: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loads_defaults() {
        let cfg = BackendConfig::new().unwrap();
        assert_eq!(cfg.element_at_fields, vec!["unmapped".to_string()]);
        assert_eq!(cfg.table_placeholder, TABLE_PLACEHOLDER);
        assert!(cfg.options.is_empty());
    }

    #[test]
    fn test_default_matches_loaded_defaults() {
        let cfg = BackendConfig::default();
        assert_eq!(cfg.element_at_fields, vec!["unmapped".to_string()]);
        assert_eq!(cfg.table_placeholder, "<TABLE>");
    }

    #[test]
    fn test_set_option_overrides() {
        let mut cfg = BackendConfig::default();
        cfg.set_option("backend_aws_table_region", "eu-west-1");
        assert_eq!(
            cfg.options.get("backend_aws_table_region").map(String::as_str),
            Some("eu-west-1")
        );
    }
}
