//! 行编辑服务：编辑、保存、删除

use std::sync::Arc;

use crate::error::{ClientError, CoreResult};
use crate::services::{checked_entry, EditorContext, LocalRejection, RowOutcome};
use crate::types::{Banner, FeedbackKind, RowAction, RowState};
use crate::validator::validate_fragment;

/// 行编辑服务
///
/// 所有行交互都经由 [`dispatch`](Self::dispatch)。处于 `Saving` / `Deleting` 的行拒绝一切动作，
/// 因此每行同时最多只有一个请求在途。
pub struct RowService {
    ctx: Arc<EditorContext>,
}

impl RowService {
    /// 创建行编辑服务实例
    #[must_use]
    pub fn new(ctx: Arc<EditorContext>) -> Self {
        Self { ctx }
    }

    /// 在 `key` 行上执行一个动作
    pub async fn dispatch(&self, key: &str, action: RowAction) -> CoreResult<RowOutcome> {
        log::debug!("Row '{key}': {}", action.name());
        match action {
            RowAction::Edit => self.edit(key).await,
            RowAction::Save { candidate } => self.save(key, candidate).await,
            RowAction::Delete => self.prompt_delete(key).await,
            RowAction::ConfirmDelete => self.delete(key).await,
            RowAction::CancelDelete => self.cancel_pending_delete(key).await,
        }
    }

    pub async fn begin_edit(&self, key: &str) -> CoreResult<RowOutcome> {
        self.dispatch(key, RowAction::Edit).await
    }

    pub async fn request_save(&self, key: &str, candidate: &str) -> CoreResult<RowOutcome> {
        self.dispatch(
            key,
            RowAction::Save {
                candidate: candidate.to_string(),
            },
        )
        .await
    }

    pub async fn request_delete(&self, key: &str) -> CoreResult<RowOutcome> {
        self.dispatch(key, RowAction::Delete).await
    }

    pub async fn confirm_delete(&self, key: &str) -> CoreResult<RowOutcome> {
        self.dispatch(key, RowAction::ConfirmDelete).await
    }

    pub async fn cancel_delete(&self, key: &str) -> CoreResult<RowOutcome> {
        self.dispatch(key, RowAction::CancelDelete).await
    }

    /// 当前等待确认删除的键（确认框中显示）
    pub async fn pending_delete(&self) -> Option<String> {
        self.ctx
            .snapshot()
            .await
            .iter()
            .find(|e| e.row_state == RowState::ConfirmingDelete)
            .map(|e| e.key.clone())
    }

    async fn edit(&self, key: &str) -> CoreResult<RowOutcome> {
        let mut view = self.ctx.view_mut().await;
        let entry = checked_entry(&mut view, key, &RowAction::Edit)?;
        entry.row_state = RowState::Editing;

        self.ctx.feedback.clear_row(key).await;
        self.ctx.feedback.render_state(key, RowState::Editing).await;
        Ok(RowOutcome::Transitioned(RowState::Editing))
    }

    async fn save(&self, key: &str, candidate: String) -> CoreResult<RowOutcome> {
        let feedback = &self.ctx.feedback;
        {
            let mut view = self.ctx.view_mut().await;
            let action = RowAction::Save {
                candidate: String::new(),
            };
            let entry = checked_entry(&mut view, key, &action)?;

            if let Err(e) = validate_fragment(&candidate) {
                // 留在 Editing，可立即重试
                log::warn!("Rejected invalid content for '{key}': {e}");
                feedback.render_row(key, FeedbackKind::Warning).await;
                feedback.show_banner(Banner::InvalidContent).await;
                return Ok(RowOutcome::Rejected(LocalRejection::InvalidContent));
            }

            entry.row_state = RowState::Saving;
            feedback.render_state(key, RowState::Saving).await;
        }

        let result = self.ctx.client.save(key, &candidate).await;

        let kind = {
            let mut view = self.ctx.view_mut().await;
            if let Some(entry) = view.get_mut(key) {
                if result.is_ok() {
                    entry.value = candidate;
                }
                entry.row_state = RowState::Viewing;
            }
            feedback.render_state(key, RowState::Viewing).await;

            if let Err(e) = &result {
                log_client_error(key, e);
                FeedbackKind::Failure
            } else {
                log::info!("Saved message '{key}'");
                FeedbackKind::Success
            }
        };

        feedback.render_row(key, kind).await;
        feedback
            .show_banner(match kind {
                FeedbackKind::Success => Banner::SaveSucceeded,
                _ => Banner::SaveFailed,
            })
            .await;
        Ok(RowOutcome::Completed(kind))
    }

    async fn prompt_delete(&self, key: &str) -> CoreResult<RowOutcome> {
        let mut view = self.ctx.view_mut().await;
        checked_entry(&mut view, key, &RowAction::Delete)?.row_state =
            RowState::ConfirmingDelete;

        // 确认框只有一个：其他等待确认的行回到 Viewing
        let mut displaced = Vec::new();
        for entry in view.iter_mut() {
            if entry.key != key && entry.row_state == RowState::ConfirmingDelete {
                entry.row_state = RowState::Viewing;
                displaced.push(entry.key.clone());
            }
        }
        for other in &displaced {
            log::debug!("Delete confirmation moved from '{other}' to '{key}'");
            self.ctx.feedback.render_state(other, RowState::Viewing).await;
        }

        self.ctx
            .feedback
            .render_state(key, RowState::ConfirmingDelete)
            .await;
        Ok(RowOutcome::Transitioned(RowState::ConfirmingDelete))
    }

    async fn cancel_pending_delete(&self, key: &str) -> CoreResult<RowOutcome> {
        let mut view = self.ctx.view_mut().await;
        checked_entry(&mut view, key, &RowAction::CancelDelete)?.row_state = RowState::Viewing;

        self.ctx.feedback.render_state(key, RowState::Viewing).await;
        Ok(RowOutcome::Transitioned(RowState::Viewing))
    }

    async fn delete(&self, key: &str) -> CoreResult<RowOutcome> {
        let feedback = &self.ctx.feedback;
        {
            let mut view = self.ctx.view_mut().await;
            checked_entry(&mut view, key, &RowAction::ConfirmDelete)?.row_state =
                RowState::Deleting;
            feedback.render_state(key, RowState::Deleting).await;
        }

        let result = self.ctx.client.remove(key).await;

        let mut view = self.ctx.view_mut().await;
        match result {
            Ok(()) => {
                view.remove(key);
                feedback.remove_row(key).await;
                feedback.show_banner(Banner::DeleteSucceeded).await;
                log::info!("Deleted message '{key}'");
                Ok(RowOutcome::Completed(FeedbackKind::Success))
            }
            Err(e) => {
                log_client_error(key, &e);
                if let Some(entry) = view.get_mut(key) {
                    entry.row_state = RowState::Viewing;
                }
                feedback.render_state(key, RowState::Viewing).await;
                feedback.show_banner(Banner::DeleteFailed).await;
                Ok(RowOutcome::Completed(FeedbackKind::Failure))
            }
        }
    }
}

/// 客户端错误按预期与否分级记录
pub(crate) fn log_client_error(key: &str, e: &ClientError) {
    if e.is_expected() {
        log::warn!("Request for '{key}' rejected: {e}");
    } else {
        log::error!("Request for '{key}' failed: {e}");
    }
}
