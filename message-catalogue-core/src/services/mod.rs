//! 业务逻辑服务层

mod add_service;
mod row_service;

pub use add_service::{AddDialog, AddMessageService, DialogPhase};
pub use row_service::RowService;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, RwLockWriteGuard};

use crate::error::{CoreError, CoreResult};
use crate::traits::{CatalogueClient, FeedbackRenderer};
use crate::types::{CatalogueView, FeedbackKind, MessageEntry, RowAction, RowState};

/// 本地前置条件失败（未发出请求）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocalRejection {
    /// 新增时键为空
    KeyRequired,
    /// 值不是合法的标记片段
    InvalidContent,
}

/// 一次交互的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "camelCase")]
pub enum RowOutcome {
    /// 仅本地状态转换
    Transitioned(RowState),
    /// 本地校验未通过，未发出请求
    Rejected(LocalRejection),
    /// 远程调用已完成
    Completed(FeedbackKind),
}

/// 编辑器上下文 - 持有所有依赖与当前视图
///
/// 平台层创建此上下文，并注入客户端与反馈渲染实现。
/// 视图锁从不跨越网络请求持有。
pub struct EditorContext {
    /// 持久化客户端
    pub client: Arc<dyn CatalogueClient>,
    /// 反馈渲染
    pub feedback: Arc<dyn FeedbackRenderer>,
    view: RwLock<CatalogueView>,
}

impl EditorContext {
    /// 创建编辑器上下文
    #[must_use]
    pub fn new(
        client: Arc<dyn CatalogueClient>,
        feedback: Arc<dyn FeedbackRenderer>,
        view: CatalogueView,
    ) -> Self {
        Self {
            client,
            feedback,
            view: RwLock::new(view),
        }
    }

    /// 当前编辑的目录 id
    pub fn catalogue_id(&self) -> &str {
        self.client.catalogue_id()
    }

    /// 视图快照
    pub async fn snapshot(&self) -> CatalogueView {
        self.view.read().await.clone()
    }

    pub async fn entry(&self, key: &str) -> Option<MessageEntry> {
        self.view.read().await.get(key).cloned()
    }

    pub async fn row_state(&self, key: &str) -> Option<RowState> {
        self.view.read().await.get(key).map(|e| e.row_state)
    }

    pub async fn len(&self) -> usize {
        self.view.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.view.read().await.is_empty()
    }

    pub(crate) async fn view_mut(&self) -> RwLockWriteGuard<'_, CatalogueView> {
        self.view.write().await
    }
}

/// 查找条目并检查转换表
pub(crate) fn checked_entry<'a>(
    view: &'a mut CatalogueView,
    key: &str,
    action: &RowAction,
) -> CoreResult<&'a mut MessageEntry> {
    let entry = view
        .get_mut(key)
        .ok_or_else(|| CoreError::EntryNotFound(key.to_string()))?;

    if !entry.row_state.accepts(action) {
        log::warn!(
            "Rejected {} on '{key}' while {}",
            action.name(),
            entry.row_state
        );
        return Err(CoreError::InvalidTransition {
            key: key.to_string(),
            state: entry.row_state.to_string(),
            action: action.name().to_string(),
        });
    }
    Ok(entry)
}
