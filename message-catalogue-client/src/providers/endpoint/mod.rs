//! Form-encoded HTTP catalogue endpoint

mod client;
mod http;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::ClientConfig;

/// Catalogue client speaking to the host page's `/admin/catalogue/message/*` endpoints
pub struct HttpCatalogueClient {
    pub(crate) client: Client,
    pub(crate) config: ClientConfig,
}

impl HttpCatalogueClient {
    /// Validate the configuration and build the underlying HTTP client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = create_http_client(&config)?;
        Ok(Self { client, config })
    }

    /// Settings this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
