//! Page-level banner visibility
//!
//! At most one banner is visible at a time. Showing a banner hides every other one.

use tokio::sync::RwLock;

use crate::types::Banner;

/// Single owner of banner visibility.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    visible: RwLock<Option<Banner>>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide all banners, then show `banner`.
    pub async fn show_banner(&self, banner: Banner) {
        let mut visible = self.visible.write().await;
        if let Some(previous) = visible.replace(banner) {
            if previous != banner {
                log::debug!("Banner {} replaced by {}", previous.element_id(), banner.element_id());
            }
        }
    }

    pub async fn hide_all(&self) {
        self.visible.write().await.take();
    }

    /// Hide `banner` if it is the visible one (the banner's close button).
    pub async fn dismiss(&self, banner: Banner) {
        let mut visible = self.visible.write().await;
        if *visible == Some(banner) {
            *visible = None;
        }
    }

    pub async fn visible(&self) -> Option<Banner> {
        *self.visible.read().await
    }
}
