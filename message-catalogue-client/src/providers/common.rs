//! Client 公共工具函数

use reqwest::Client;

use crate::error::{ClientError, Result};
use crate::types::ClientConfig;

// ============ HTTP Client ============

/// Build the reqwest client for a configuration
///
/// No whole-request timeout is set unless the configuration asks for one;
/// a pending call then runs until the transport itself fails.
pub fn create_http_client(config: &ClientConfig) -> Result<Client> {
    let mut builder = Client::builder().connect_timeout(config.connect_timeout);
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| ClientError::InvalidConfig {
        param: "http_client".to_string(),
        detail: e.to_string(),
    })
}
