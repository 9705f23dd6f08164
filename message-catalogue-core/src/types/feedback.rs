//! 反馈类型：行指示器与全局横幅

use std::fmt;

use serde::{Deserialize, Serialize};

/// 操作结果类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Failure,
    Warning,
}

impl FeedbackKind {
    /// 该类别对应的行指示器
    pub fn indicator(self) -> Indicator {
        match self {
            Self::Success => Indicator {
                kind: self,
                icon: "glyphicon-ok",
                sr_text: "(success)",
                container_class: "has-success",
            },
            Self::Failure => Indicator {
                kind: self,
                icon: "glyphicon-remove",
                sr_text: "(error)",
                container_class: "has-error",
            },
            Self::Warning => Indicator {
                kind: self,
                icon: "glyphicon-warning-sign",
                sr_text: "(warning)",
                container_class: "has-warning",
            },
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Warning => "warning",
        })
    }
}

/// 行内结果指示器（图标 + 读屏文本 + 容器样式）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    pub kind: FeedbackKind,
    /// 图标类名
    pub icon: &'static str,
    /// 读屏文本
    pub sr_text: &'static str,
    /// 容器样式类（另需 `has-feedback`）
    pub container_class: &'static str,
}

impl Indicator {
    /// 所有指示器共有的容器样式类
    pub const FEEDBACK_CLASS: &'static str = "has-feedback";

    /// 容器的完整 class 属性值
    pub fn container_classes(&self) -> String {
        format!("{} {}", self.container_class, Self::FEEDBACK_CLASS)
    }

    /// 指示器的两个 span
    pub fn markup(&self) -> String {
        format!(
            r#"<span class="result-indicator glyphicon {} form-control-feedback" aria-hidden="true"></span><span class="result-indicator sr-only">{}</span>"#,
            self.icon, self.sr_text
        )
    }
}

/// 页面级横幅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Banner {
    SaveSucceeded,
    SaveFailed,
    AddSucceeded,
    AddFailed,
    DeleteSucceeded,
    DeleteFailed,
    /// 内容不是合法的标记片段
    InvalidContent,
}

impl Banner {
    pub const ALL: [Self; 7] = [
        Self::SaveSucceeded,
        Self::SaveFailed,
        Self::AddSucceeded,
        Self::AddFailed,
        Self::DeleteSucceeded,
        Self::DeleteFailed,
        Self::InvalidContent,
    ];

    pub fn kind(self) -> FeedbackKind {
        match self {
            Self::SaveSucceeded | Self::AddSucceeded | Self::DeleteSucceeded => {
                FeedbackKind::Success
            }
            Self::SaveFailed | Self::AddFailed | Self::DeleteFailed => FeedbackKind::Failure,
            Self::InvalidContent => FeedbackKind::Warning,
        }
    }

    /// 宿主页面上对应的元素 id
    pub fn element_id(self) -> &'static str {
        match self {
            Self::SaveSucceeded => "successSaveAlert",
            Self::SaveFailed => "errorSaveAlert",
            Self::AddSucceeded => "successAddAlert",
            Self::AddFailed => "errorAddAlert",
            Self::DeleteSucceeded => "successDeleteAlert",
            Self::DeleteFailed => "errorDeleteAlert",
            Self::InvalidContent => "warningInvalidXmlAlert",
        }
    }
}
