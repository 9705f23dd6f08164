//! Feedback renderer abstract Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::notification::NotificationCenter;
use crate::types::{Banner, FeedbackKind, Indicator, RowState};

/// Feedback Renderer Trait
///
/// Pure presentation: the services call it after every transition, it never feeds back into
/// the row state. Every method is idempotent.
/// Provides a default memory implementation of `InMemoryFeedback`.
#[async_trait]
pub trait FeedbackRenderer: Send + Sync {
    /// Reflect a row's state (input enabled, action icon, busy indicator)
    async fn render_state(&self, key: &str, state: RowState);

    /// Replace the row's result indicator
    async fn render_row(&self, key: &str, kind: FeedbackKind);

    /// Remove the row's result indicator
    async fn clear_row(&self, key: &str);

    /// Destroy the row
    async fn remove_row(&self, key: &str);

    /// Hide every banner and show `banner`
    async fn show_banner(&self, banner: Banner);

    async fn hide_banners(&self);
}

/// What one row currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedRow {
    pub state: RowState,
    pub indicator: Option<Indicator>,
}

/// In-memory feedback renderer
///
/// Default implementation, keeps the visible state so hosts and tests can read it back.
#[derive(Clone, Default)]
pub struct InMemoryFeedback {
    rows: Arc<RwLock<HashMap<String, RenderedRow>>>,
    notifications: Arc<NotificationCenter>,
}

impl InMemoryFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn row(&self, key: &str) -> Option<RenderedRow> {
        self.rows.read().await.get(key).copied()
    }

    pub async fn indicator(&self, key: &str) -> Option<Indicator> {
        self.row(key).await.and_then(|row| row.indicator)
    }

    pub async fn rendered_state(&self, key: &str) -> Option<RowState> {
        self.row(key).await.map(|row| row.state)
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }
}

#[async_trait]
impl FeedbackRenderer for InMemoryFeedback {
    async fn render_state(&self, key: &str, state: RowState) {
        self.rows
            .write()
            .await
            .entry(key.to_string())
            .and_modify(|row| row.state = state)
            .or_insert(RenderedRow {
                state,
                indicator: None,
            });
    }

    async fn render_row(&self, key: &str, kind: FeedbackKind) {
        let indicator = Some(kind.indicator());
        self.rows
            .write()
            .await
            .entry(key.to_string())
            .and_modify(|row| row.indicator = indicator)
            .or_insert(RenderedRow {
                state: RowState::Viewing,
                indicator,
            });
    }

    async fn clear_row(&self, key: &str) {
        if let Some(row) = self.rows.write().await.get_mut(key) {
            row.indicator = None;
        }
    }

    async fn remove_row(&self, key: &str) {
        self.rows.write().await.remove(key);
    }

    async fn show_banner(&self, banner: Banner) {
        self.notifications.show_banner(banner).await;
    }

    async fn hide_banners(&self) {
        self.notifications.hide_all().await;
    }
}
