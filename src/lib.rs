//! Sigma-to-Athena SQL translation backend
//!
//! Compiles pre-normalized Sigma leaf conditions into Athena SQL boolean
//! predicates, and provides the run-scoped pipeline state populated by
//! template substitution and read by later query-assembly steps.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod translator;

pub use config::{BackendConfig, TABLE_PLACEHOLDER};
pub use error::{BackendError, Result};
pub use models::{ConditionValue, FieldRef, LeafCondition, Modifier};
pub use pipeline::{substitute, PipelineState, SetStateFromOptions};
pub use translator::{ComparisonShape, Translator};
