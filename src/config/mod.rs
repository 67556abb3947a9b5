//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::state::DateRange;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dashboard-wide configuration
///
/// Every field has a default, so a document only needs to name the
/// fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Records per page in every list view
    pub page_size: usize,

    /// Initial date-range window for transaction views
    pub date_range: DateRange,

    /// Simulated payment processing delay, in milliseconds
    pub payment_delay_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            date_range: DateRange::AllTime,
            payment_delay_ms: 2000,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Create the default configuration
    pub fn default_config() -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
