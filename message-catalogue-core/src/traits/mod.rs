//! Collaborator abstraction trait definition

mod feedback_renderer;

pub use feedback_renderer::{FeedbackRenderer, InMemoryFeedback, RenderedRow};

// Re-export the persistence client trait
pub use message_catalogue_client::CatalogueClient;
