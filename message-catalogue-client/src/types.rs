//! Request and configuration types for the catalogue endpoint.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ClientError, Result};

/// Default connect timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// The three remote operations exposed by the catalogue endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageOperation {
    /// Update the value of an existing message
    Save,
    /// Create a message (the endpoint upserts when the key already exists)
    Add,
    /// Delete a message
    Remove,
}

impl MessageOperation {
    /// Path appended to the host page's base path.
    pub fn path_suffix(self) -> &'static str {
        match self {
            Self::Save => "/admin/catalogue/message/save",
            Self::Add => "/admin/catalogue/message/add",
            Self::Remove => "/admin/catalogue/message/remove",
        }
    }

    /// Short name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for MessageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form body for `save` and `add`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageForm<'a> {
    #[serde(rename = "message-key")]
    pub key: &'a str,
    #[serde(rename = "message-value")]
    pub value: &'a str,
    #[serde(rename = "message-catalogue")]
    pub catalogue: &'a str,
}

/// Form body for `remove`.
#[derive(Debug, Clone, Serialize)]
pub struct RemoveMessageForm<'a> {
    #[serde(rename = "message-key")]
    pub key: &'a str,
    #[serde(rename = "message-catalogue")]
    pub catalogue: &'a str,
}

/// Connection settings for [`HttpCatalogueClient`](crate::HttpCatalogueClient).
///
/// The catalogue id is fixed for the lifetime of a client: every request
/// carries it as `message-catalogue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Host page prefix, e.g. `https://repo.example.org/xmlui`
    pub base_path: String,
    /// Catalogue being edited (the page's `catalogue` query parameter)
    pub catalogue_id: String,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout; `None` lets a request run until the transport gives up
    pub request_timeout: Option<Duration>,
    /// Extra attempts for transient failures (0 = single attempt)
    pub max_retries: u32,
}

impl ClientConfig {
    pub fn new(base_path: impl Into<String>, catalogue_id: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            catalogue_id: catalogue_id.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: None,
            max_retries: 0,
        }
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Check that the base path is an absolute http(s) URL and the catalogue id is set.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_path).map_err(|e| ClientError::InvalidConfig {
            param: "base_path".to_string(),
            detail: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidConfig {
                param: "base_path".to_string(),
                detail: format!("unsupported scheme: {}", url.scheme()),
            });
        }

        if self.catalogue_id.trim().is_empty() {
            return Err(ClientError::InvalidConfig {
                param: "catalogue_id".to_string(),
                detail: "catalogue id must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Full endpoint URL for an operation.
    ///
    /// The base path is kept verbatim (a context path like `/xmlui` must survive),
    /// so the suffix is appended rather than resolved with `Url::join`.
    pub fn endpoint(&self, operation: MessageOperation) -> String {
        format!(
            "{}{}",
            self.base_path.trim_end_matches('/'),
            operation.path_suffix()
        )
    }
}
