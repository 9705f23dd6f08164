//! 目录条目与行状态

use std::fmt;

use serde::{Deserialize, Serialize};

/// 行状态
///
/// 每行任意时刻只处于一个状态。`Saving` 与 `Deleting` 表示该行有一个请求在途。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowState {
    /// 只读展示（初始状态）
    #[default]
    Viewing,
    /// 值可编辑
    Editing,
    /// 保存请求在途
    Saving,
    /// 删除确认框已弹出
    ConfirmingDelete,
    /// 删除请求在途
    Deleting,
}

impl RowState {
    /// 是否有请求在途
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Saving | Self::Deleting)
    }

    /// 值输入框是否可编辑
    pub fn input_enabled(self) -> bool {
        self == Self::Editing
    }

    /// 行主按钮上显示的图标
    pub fn action_icon(self) -> &'static str {
        match self {
            Self::Viewing | Self::ConfirmingDelete => "glyphicon-edit",
            Self::Editing => "glyphicon-floppy-disk",
            Self::Saving | Self::Deleting => "glyphicon-repeat right-spinner",
        }
    }

    /// 转换表：当前状态是否接受该动作
    pub fn accepts(self, action: &RowAction) -> bool {
        match action {
            RowAction::Edit => self == Self::Viewing,
            RowAction::Save { .. } => self == Self::Editing,
            RowAction::Delete => matches!(self, Self::Viewing | Self::Editing),
            RowAction::ConfirmDelete | RowAction::CancelDelete => self == Self::ConfirmingDelete,
        }
    }
}

impl fmt::Display for RowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Viewing => "viewing",
            Self::Editing => "editing",
            Self::Saving => "saving",
            Self::ConfirmingDelete => "confirming delete",
            Self::Deleting => "deleting",
        })
    }
}

/// 行上的用户交互
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum RowAction {
    /// 点击编辑
    Edit,
    /// 点击保存，携带输入框中的候选值
    Save { candidate: String },
    /// 点击删除（弹出确认框）
    Delete,
    /// 确认删除
    ConfirmDelete,
    /// 取消删除
    CancelDelete,
}

impl RowAction {
    /// 动作名（用于日志与错误信息）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Save { .. } => "save",
            Self::Delete => "delete",
            Self::ConfirmDelete => "confirm delete of",
            Self::CancelDelete => "cancel delete of",
        }
    }
}

/// 目录条目（表格中的一行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEntry {
    /// 消息键，创建后不可变
    pub key: String,
    /// 消息内容（标记片段）
    pub value: String,
    /// 行状态
    #[serde(default)]
    pub row_state: RowState,
}

impl MessageEntry {
    /// 创建处于 `Viewing` 的条目
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            row_state: RowState::Viewing,
        }
    }

    /// 行内输入框的 id：键中的 `.` 替换为 `_`
    pub fn field_id(&self) -> String {
        self.key.replace('.', "_")
    }
}
