//! 新增消息服务（新增对话框）

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::row_service::log_client_error;
use crate::services::{EditorContext, LocalRejection, RowOutcome};
use crate::types::{Banner, FeedbackKind, RowState};
use crate::validator::validate_fragment;

/// 对话框阶段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DialogPhase {
    #[default]
    Closed,
    Open,
    /// 新增请求在途
    Submitting,
}

impl fmt::Display for DialogPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Closed => "closed",
            Self::Open => "open",
            Self::Submitting => "submitting",
        })
    }
}

/// 新增对话框的可见状态
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDialog {
    pub phase: DialogPhase,
    /// 草稿键
    pub key: String,
    /// 草稿值
    pub value: String,
    /// "键不能为空" 提示是否可见
    pub key_error: bool,
    /// "内容不合法" 提示是否可见
    pub content_error: bool,
}

/// 新增消息服务
pub struct AddMessageService {
    ctx: Arc<EditorContext>,
    dialog: RwLock<AddDialog>,
}

impl AddMessageService {
    /// 创建新增服务实例
    #[must_use]
    pub fn new(ctx: Arc<EditorContext>) -> Self {
        Self {
            ctx,
            dialog: RwLock::new(AddDialog::default()),
        }
    }

    pub async fn dialog(&self) -> AddDialog {
        self.dialog.read().await.clone()
    }

    /// 打开对话框；已打开时不做任何事
    pub async fn open(&self) {
        let mut dialog = self.dialog.write().await;
        if dialog.phase == DialogPhase::Closed {
            dialog.phase = DialogPhase::Open;
        }
    }

    /// 关闭对话框并清空表单
    pub async fn cancel(&self) -> CoreResult<()> {
        let mut dialog = self.dialog.write().await;
        if dialog.phase == DialogPhase::Submitting {
            return Err(Self::busy(&dialog, "cancel"));
        }
        *dialog = AddDialog::default();
        Ok(())
    }

    /// 提交新增
    ///
    /// 键去除首尾空白后不能为空，值必须是合法的标记片段；两者任一不满足都不会发出请求，
    /// 对话框保持打开并显示对应提示。
    pub async fn request_add(&self, key: &str, value: &str) -> CoreResult<RowOutcome> {
        let key = key.trim().to_string();
        let existing = {
            let mut dialog = self.dialog.write().await;
            if dialog.phase == DialogPhase::Submitting {
                return Err(Self::busy(&dialog, "add"));
            }

            *dialog = AddDialog {
                phase: DialogPhase::Open,
                key: key.clone(),
                value: value.to_string(),
                key_error: false,
                content_error: false,
            };

            if key.is_empty() {
                log::warn!("Rejected add: key is required");
                dialog.key_error = true;
                return Ok(RowOutcome::Rejected(LocalRejection::KeyRequired));
            }
            if let Err(e) = validate_fragment(value) {
                log::warn!("Rejected add of '{key}': invalid content {e}");
                dialog.content_error = true;
                return Ok(RowOutcome::Rejected(LocalRejection::InvalidContent));
            }

            let existing = self.claim_existing_row(&key).await?;
            dialog.phase = DialogPhase::Submitting;
            existing
        };

        let feedback = &self.ctx.feedback;
        if existing {
            feedback.render_state(&key, RowState::Saving).await;
        }

        let result = self.ctx.client.add(&key, value).await;

        match result {
            Ok(()) => {
                let appended = {
                    let mut view = self.ctx.view_mut().await;
                    if let Some(entry) = view.get_mut(&key) {
                        entry.row_state = RowState::Viewing;
                    }
                    view.upsert(&key, value)?
                };
                feedback.render_state(&key, RowState::Viewing).await;
                *self.dialog.write().await = AddDialog::default();
                feedback.show_banner(Banner::AddSucceeded).await;
                if appended {
                    log::info!("Added message '{key}'");
                } else {
                    log::info!("Updated message '{key}' through add");
                }
                Ok(RowOutcome::Completed(FeedbackKind::Success))
            }
            Err(e) => {
                log_client_error(&key, &e);
                if existing {
                    if let Some(entry) = self.ctx.view_mut().await.get_mut(&key) {
                        entry.row_state = RowState::Viewing;
                    }
                    feedback.render_state(&key, RowState::Viewing).await;
                }
                // 表单保留，便于重试
                self.dialog.write().await.phase = DialogPhase::Open;
                feedback.show_banner(Banner::AddFailed).await;
                Ok(RowOutcome::Completed(FeedbackKind::Failure))
            }
        }
    }

    /// 键已在视图中时，该行必须处于 `Viewing`，并在请求期间标记为 `Saving`
    ///
    /// 返回该键是否已存在。
    async fn claim_existing_row(&self, key: &str) -> CoreResult<bool> {
        let mut view = self.ctx.view_mut().await;
        let Some(entry) = view.get_mut(key) else {
            return Ok(false);
        };
        if entry.row_state != RowState::Viewing {
            log::warn!("Rejected add of '{key}' while the row is {}", entry.row_state);
            return Err(CoreError::InvalidTransition {
                key: key.to_string(),
                state: entry.row_state.to_string(),
                action: "add".to_string(),
            });
        }
        entry.row_state = RowState::Saving;
        Ok(true)
    }

    fn busy(dialog: &AddDialog, action: &str) -> CoreError {
        log::warn!("Rejected {action} while the add dialog is {}", dialog.phase);
        CoreError::InvalidTransition {
            key: dialog.key.clone(),
            state: dialog.phase.to_string(),
            action: action.to_string(),
        }
    }
}
