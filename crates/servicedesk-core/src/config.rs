//! Ingest configuration: source column names and the sentinel status.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Upstream status meaning "the Case Type column is already authoritative".
pub const DEFAULT_SENTINEL_STATUS: &str = "Classified";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// How rows are read from a tabular source and when to trust upstream labels.
///
/// Missing keys in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub sentinel_status: String,
    pub description_column: String,
    pub resolution_column: String,
    pub status_column: String,
    pub case_type_column: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            sentinel_status: DEFAULT_SENTINEL_STATUS.to_string(),
            description_column: "Description".to_string(),
            resolution_column: "Resolution Response".to_string(),
            status_column: "Status".to_string(),
            case_type_column: "Case Type".to_string(),
        }
    }
}

impl IngestConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        debug!(path = %path.display(), sentinel = %config.sentinel_status, "loaded ingest config");
        Ok(config)
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel_status = sentinel.into();
        self
    }
}
