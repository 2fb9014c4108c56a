//! Lab configuration.
//!
//! The configuration is a plain value built once by the entrypoint and
//! handed to whichever lab needs it. There is no process-wide instance.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Value used when no configuration file is supplied.
pub const DEFAULT_CONFIG_VALUE: &str = "Bloomify Default Config";

/// Configuration shared by the labs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Value shown by the creational lab
    pub value: String,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_CONFIG_VALUE.to_string(),
        }
    }
}

impl LabConfig {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Parse a configuration from YAML.
    ///
    /// Missing fields fall back to their defaults; an empty `value` is rejected.
    pub fn from_yaml(yaml: &str) -> CoreResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a YAML file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound(path.to_path_buf()));
        }

        debug!("Loading lab configuration from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Serialize the configuration to YAML.
    pub fn to_yaml(&self) -> CoreResult<String> {
        serde_yaml::to_string(self).map_err(CoreError::from)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.value.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "`value` must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
