//! Message Catalogue Core Library
//!
//! Editing logic for a key/value message catalogue rendered as a table:
//! - Entry registry ([`CatalogueView`])
//! - Markup fragment validation ([`validator`])
//! - Per-row state machine ([`RowService`]) and the add dialog ([`AddMessageService`])
//! - Feedback rendering ([`FeedbackRenderer`], [`NotificationCenter`])
//!
//! Persistence goes through [`CatalogueClient`]; rendering through [`FeedbackRenderer`].
//! Both are injected via [`EditorContext`], so hosts and tests supply their own.

pub mod error;
pub mod notification;
pub mod services;
pub mod traits;
pub mod types;
pub mod validator;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use notification::NotificationCenter;
pub use services::{
    AddDialog, AddMessageService, DialogPhase, EditorContext, LocalRejection, RowOutcome,
    RowService,
};
pub use traits::{CatalogueClient, FeedbackRenderer, InMemoryFeedback, RenderedRow};
pub use types::{
    Banner, CatalogueView, FeedbackKind, Indicator, MessageEntry, RowAction, RowState, RowStripe,
};
pub use validator::{is_valid_fragment, validate_fragment, MarkupError};
