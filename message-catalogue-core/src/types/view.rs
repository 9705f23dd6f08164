//! 目录视图（条目注册表）

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

use super::entry::{MessageEntry, RowState};

/// 行斑马纹，由位置推导，不存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStripe {
    Odd,
    Even,
}

impl RowStripe {
    /// CSS 类名
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Odd => "odd",
            Self::Even => "even",
        }
    }
}

/// 当前渲染的全部条目，顺序即文档顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogueView {
    entries: Vec<MessageEntry>,
}

impl CatalogueView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 由页面初始内容构建视图
    ///
    /// 去除首尾空白后为空的键被跳过；重复键只保留第一次出现。
    pub fn from_messages<I, K, V>(messages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut view = Self::new();
        for (key, value) in messages {
            let key = key.into();
            if key.trim().is_empty() {
                log::warn!("Skipping catalogue entry with a blank key");
                continue;
            }
            if let Err(e) = view.push(MessageEntry::new(key, value)) {
                log::warn!("Skipping catalogue entry: {e}");
            }
        }
        view
    }

    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut MessageEntry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// 追加到末尾
    pub fn push(&mut self, entry: MessageEntry) -> CoreResult<()> {
        if self.contains(&entry.key) {
            return Err(CoreError::DuplicateKey(entry.key));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// 键已存在时原地更新值，否则以 `Viewing` 状态追加
    ///
    /// 返回 `true` 表示追加了新行。已存在的行必须处于 `Viewing`，否则返回
    /// `CoreError::InvalidTransition`，值不变。
    pub fn upsert(&mut self, key: &str, value: &str) -> CoreResult<bool> {
        if let Some(entry) = self.get_mut(key) {
            if entry.row_state != RowState::Viewing {
                return Err(CoreError::InvalidTransition {
                    key: key.to_string(),
                    state: entry.row_state.to_string(),
                    action: "add".to_string(),
                });
            }
            value.clone_into(&mut entry.value);
            Ok(false)
        } else {
            self.entries.push(MessageEntry::new(key, value));
            Ok(true)
        }
    }

    /// 移除并返回条目
    pub fn remove(&mut self, key: &str) -> Option<MessageEntry> {
        let index = self.position(key)?;
        Some(self.entries.remove(index))
    }

    /// 条目在文档中的位置
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut MessageEntry> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// 第 `index` 行（从 0 开始）的斑马纹，第 0 行为 `odd`
    pub fn stripe(index: usize) -> RowStripe {
        if index % 2 == 0 {
            RowStripe::Odd
        } else {
            RowStripe::Even
        }
    }
}
