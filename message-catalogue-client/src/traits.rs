use async_trait::async_trait;

use crate::error::Result;

/// 消息目录持久化 Trait
///
/// One request/response round trip per call. Implementations carry the catalogue id
/// themselves; callers only name the message.
///
/// Platform implementation:
/// - `HttpCatalogueClient`: form-encoded POST against the host page's endpoint
#[async_trait]
pub trait CatalogueClient: Send + Sync {
    /// Catalogue every request is scoped to
    fn catalogue_id(&self) -> &str;

    /// Store a new value for an existing message
    ///
    /// # Arguments
    /// * `key` - Message key
    /// * `value` - New message body (markup fragment)
    async fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Create a message
    ///
    /// # Arguments
    /// * `key` - Message key
    /// * `value` - Message body (markup fragment)
    async fn add(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a message
    ///
    /// # Arguments
    /// * `key` - Message key
    async fn remove(&self, key: &str) -> Result<()>;
}
