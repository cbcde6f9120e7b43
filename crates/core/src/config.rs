//! Container configuration via TOML
//!
//! Embedders describe limits and capacity hints in a small TOML document.
//! Every key is optional; missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::container::{OrderedSet, Set};
use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::value::{Value, ValueKind};

/// Container configuration
///
/// # Example
///
/// ```toml
/// # Capacity hint for newly created containers (default: 0)
/// initial_capacity = 16
///
/// [limits]
/// max_text_bytes = 1024
/// max_container_entries = 10000
/// max_nesting_depth = 8
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Capacity hint for containers built by [`Config::empty_container`]
    pub initial_capacity: usize,
    /// Limits enforced by [`Container::add_checked`](crate::Container::add_checked)
    pub limits: Limits,
}

impl Config {
    /// Parse and validate a configuration document
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the document is not valid TOML,
    /// has keys of the wrong type, or fails [`Config::validate`].
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        debug!(
            initial_capacity = config.initial_capacity,
            max_container_entries = config.limits.max_container_entries,
            max_nesting_depth = config.limits.max_nesting_depth,
            "loaded container config"
        );
        Ok(config)
    }

    /// Reject settings under which no container could hold anything
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when `max_container_entries` or
    /// `max_nesting_depth` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_container_entries == 0 {
            return Err(Error::InvalidConfig(
                "limits.max_container_entries must be positive".to_string(),
            ));
        }
        if self.limits.max_nesting_depth == 0 {
            return Err(Error::InvalidConfig(
                "limits.max_nesting_depth must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Build an empty container value of the given kind
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if `kind` is not a container kind.
    pub fn empty_container(&self, kind: ValueKind) -> Result<Value> {
        match kind {
            ValueKind::Set => Ok(Set::with_capacity(self.initial_capacity).into()),
            ValueKind::OrderedSet => Ok(OrderedSet::with_capacity(self.initial_capacity).into()),
            actual => Err(Error::TypeMismatch {
                expected: "container kind",
                actual,
            }),
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# nyan container configuration
#
# Capacity hint for newly created containers (default: 0)
initial_capacity = 0

[limits]
# Maximum text, file and object-name length in bytes (default: 16MB)
max_text_bytes = 16777216
# Maximum number of entries per container (default: 1M)
max_container_entries = 1000000
# Maximum container nesting depth (default: 128)
max_nesting_depth = 128
"#
    }
}
