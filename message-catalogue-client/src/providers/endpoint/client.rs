//! `CatalogueClient` trait implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::CatalogueClient;
use crate::types::{MessageForm, MessageOperation, RemoveMessageForm};
use crate::utils::log_sanitizer::summarize_for_log;

use super::HttpCatalogueClient;

#[async_trait]
impl CatalogueClient for HttpCatalogueClient {
    fn catalogue_id(&self) -> &str {
        &self.config.catalogue_id
    }

    async fn save(&self, key: &str, value: &str) -> Result<()> {
        log::debug!("Saving message {key} = {}", summarize_for_log(value));
        let form = MessageForm {
            key,
            value,
            catalogue: &self.config.catalogue_id,
        };
        self.post_form(MessageOperation::Save, &form).await
    }

    async fn add(&self, key: &str, value: &str) -> Result<()> {
        log::debug!("Adding message {key} = {}", summarize_for_log(value));
        let form = MessageForm {
            key,
            value,
            catalogue: &self.config.catalogue_id,
        };
        self.post_form(MessageOperation::Add, &form).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        log::debug!("Removing message {key}");
        let form = RemoveMessageForm {
            key,
            catalogue: &self.config.catalogue_id,
        };
        self.post_form(MessageOperation::Remove, &form).await
    }
}
