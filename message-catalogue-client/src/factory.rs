//! Client factory function.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::HttpCatalogueClient;
use crate::traits::CatalogueClient;
use crate::types::ClientConfig;

/// Creates a [`CatalogueClient`] for the given configuration.
///
/// The returned client is wrapped in `Arc<dyn CatalogueClient>` so it can be shared
/// between the row and add-dialog services.
///
/// # Examples
///
/// ```rust,no_run
/// use message_catalogue_client::{create_client, ClientConfig};
///
/// let client = create_client(ClientConfig::new(
///     "https://repo.example.org/xmlui",
///     "6F1ED002AB5595859014EBF0951522D9",
/// ))
/// .unwrap();
/// ```
pub fn create_client(config: ClientConfig) -> Result<Arc<dyn CatalogueClient>> {
    Ok(Arc::new(HttpCatalogueClient::new(config)?))
}
