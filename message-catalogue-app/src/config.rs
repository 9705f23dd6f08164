//! Editor configuration (JSON).

use std::time::Duration;

use message_catalogue_client::{ClientConfig, DEFAULT_CONNECT_TIMEOUT_SECS};
use message_catalogue_core::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

/// Host-supplied settings for the persistence client.
///
/// ```json
/// { "base_path": "https://repo.example.org/xmlui", "max_retries": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Prefix the endpoint paths are appended to (the page's context path)
    pub base_path: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Whole-request timeout; absent means none
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub max_retries: u32,
}

impl EditorConfig {
    #[must_use]
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: None,
            max_retries: 0,
        }
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::ValidationError(format!("invalid editor config: {e}")))
    }

    /// Client settings for one catalogue.
    pub fn client_config(&self, catalogue_id: &str) -> ClientConfig {
        ClientConfig::new(&self.base_path, catalogue_id)
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .with_request_timeout(self.request_timeout_secs.map(Duration::from_secs))
            .with_max_retries(self.max_retries)
    }
}
