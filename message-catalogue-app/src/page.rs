//! Page context: which catalogue the editor page is showing.

use message_catalogue_core::error::{CoreError, CoreResult};
use url::Url;

/// Query parameter naming the catalogue on the editor page
pub const CATALOGUE_PARAM: &str = "catalogue";

/// Path of the editor page below the base path
pub const EDITOR_PAGE_SUFFIX: &str = "/admin/catalogue/messages";

/// The editor page's URL and the catalogue id read from it once at bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    url: Url,
    catalogue_id: String,
}

impl PageContext {
    pub fn parse(page_url: &str) -> CoreResult<Self> {
        let url = Url::parse(page_url)
            .map_err(|e| CoreError::ValidationError(format!("invalid page URL: {e}")))?;

        let catalogue_id = url
            .query_pairs()
            .find(|(name, _)| name == CATALOGUE_PARAM)
            .map(|(_, value)| value.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                CoreError::ValidationError(format!(
                    "page URL has no '{CATALOGUE_PARAM}' parameter"
                ))
            })?;

        Ok(Self { url, catalogue_id })
    }

    pub fn catalogue_id(&self) -> &str {
        &self.catalogue_id
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// `{base}/admin/catalogue/messages?catalogue={id}`
    pub fn editor_url(base_path: &str, catalogue_id: &str) -> CoreResult<String> {
        let mut url = Url::parse(&format!(
            "{}{EDITOR_PAGE_SUFFIX}",
            base_path.trim_end_matches('/')
        ))
        .map_err(|e| CoreError::ValidationError(format!("invalid base path: {e}")))?;
        url.query_pairs_mut()
            .append_pair(CATALOGUE_PARAM, catalogue_id);
        Ok(url.into())
    }
}
