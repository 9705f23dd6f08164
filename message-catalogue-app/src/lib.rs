//! Bootstrap for the message catalogue editor.
//!
//! Provides `EditorState` (service container), `EditorStateBuilder` (collaborator injection),
//! `PageContext` (catalogue id from the page URL) and `EditorConfig` (client settings).

mod config;
mod page;

pub use config::EditorConfig;
pub use page::{PageContext, CATALOGUE_PARAM, EDITOR_PAGE_SUFFIX};

use std::sync::Arc;

use message_catalogue_client::create_client;
use message_catalogue_core::error::{CoreError, CoreResult};
use message_catalogue_core::services::{AddMessageService, EditorContext, RowService};
use message_catalogue_core::traits::{CatalogueClient, FeedbackRenderer, InMemoryFeedback};
use message_catalogue_core::types::CatalogueView;

/// Editor state for one catalogue page.
///
/// Holds the `EditorContext` and the services operating on it. A host constructs this once
/// per page via `EditorStateBuilder`.
pub struct EditorState {
    /// Shared context (client, feedback renderer, view)
    pub ctx: Arc<EditorContext>,
    /// Page the editor was opened on
    pub page: PageContext,
    /// Edit / save / delete on existing rows
    pub row_service: RowService,
    /// Add dialog
    pub add_service: AddMessageService,
}

impl EditorState {
    pub fn catalogue_id(&self) -> &str {
        self.page.catalogue_id()
    }
}

/// Builder for constructing `EditorState`.
///
/// # Required
/// - `page_url`: the editor page URL, carrying the `catalogue` query parameter
/// - `config`: unless a `client` is injected
///
/// # Optional
/// - `initial_messages`: the catalogue content rendered with the page
/// - `client`: defaults to the HTTP client built from `config`
/// - `feedback`: defaults to `InMemoryFeedback`
pub struct EditorStateBuilder {
    config: Option<EditorConfig>,
    page_url: Option<String>,
    initial_messages: Vec<(String, String)>,
    client: Option<Arc<dyn CatalogueClient>>,
    feedback: Option<Arc<dyn FeedbackRenderer>>,
}

impl EditorStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            page_url: None,
            initial_messages: Vec::new(),
            client: None,
            feedback: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn initial_messages<I, K, V>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.initial_messages = messages
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    #[must_use]
    pub fn client(mut self, client: Arc<dyn CatalogueClient>) -> Self {
        self.client = Some(client);
        self
    }

    #[must_use]
    pub fn feedback(mut self, feedback: Arc<dyn FeedbackRenderer>) -> Self {
        self.feedback = Some(feedback);
        self
    }

    /// Build the `EditorState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if the page URL is missing or has no catalogue id,
    /// or if neither `config` nor `client` was given. Returns `CoreError::Client` if the
    /// HTTP client cannot be built from `config`.
    pub fn build(self) -> CoreResult<EditorState> {
        let page_url = self
            .page_url
            .ok_or_else(|| CoreError::ValidationError("page_url is required".to_string()))?;
        let page = PageContext::parse(&page_url)?;

        let client = match self.client {
            Some(client) => {
                if client.catalogue_id() != page.catalogue_id() {
                    log::warn!(
                        "Injected client targets catalogue {} but the page shows {}",
                        client.catalogue_id(),
                        page.catalogue_id()
                    );
                }
                client
            }
            None => {
                let config = self.config.ok_or_else(|| {
                    CoreError::ValidationError("config is required".to_string())
                })?;
                create_client(config.client_config(page.catalogue_id()))?
            }
        };
        let feedback = self
            .feedback
            .unwrap_or_else(|| Arc::new(InMemoryFeedback::new()));
        let view = CatalogueView::from_messages(self.initial_messages);

        log::info!(
            "Editing catalogue {} ({} messages)",
            page.catalogue_id(),
            view.len()
        );

        let ctx = Arc::new(EditorContext::new(client, feedback, view));
        let row_service = RowService::new(Arc::clone(&ctx));
        let add_service = AddMessageService::new(Arc::clone(&ctx));

        Ok(EditorState {
            ctx,
            page,
            row_service,
            add_service,
        })
    }
}

impl Default for EditorStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
