//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::Arc;

use async_trait::async_trait;
use message_catalogue_client::{CatalogueClient, ClientError};
use tokio::sync::{Notify, RwLock};

use crate::services::EditorContext;
use crate::traits::InMemoryFeedback;
use crate::types::CatalogueView;

pub const TEST_CATALOGUE_ID: &str = "6F1ED002AB5595859014EBF0951522D9";

// ===== MockCatalogueClient =====

pub struct MockCatalogueClient {
    /// 已收到的调用，形如 `save key = value`
    calls: RwLock<Vec<String>>,
    /// 接下来多少次调用返回错误
    failures_left: RwLock<usize>,
    /// 若 Some，每次调用在返回前等待通知（用于保持请求在途）
    gate: RwLock<Option<Arc<Notify>>>,
}

impl MockCatalogueClient {
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            failures_left: RwLock::new(0),
            gate: RwLock::new(None),
        }
    }

    pub async fn fail_next(&self, times: usize) {
        *self.failures_left.write().await = times;
    }

    /// 之后的调用都挂起，直到返回的 `Notify` 被通知
    pub async fn hold_calls(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.write().await = Some(Arc::clone(&gate));
        gate
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    async fn respond(&self, operation: &str, call: String) -> Result<(), ClientError> {
        self.calls.write().await.push(call);

        let gate = self.gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let mut failures = self.failures_left.write().await;
        if *failures > 0 {
            *failures -= 1;
            return Err(ClientError::HttpStatus {
                operation: operation.to_string(),
                status: 500,
                raw_message: Some("mock failure".to_string()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogueClient for MockCatalogueClient {
    fn catalogue_id(&self) -> &str {
        TEST_CATALOGUE_ID
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.respond("save", format!("save {key} = {value}")).await
    }

    async fn add(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.respond("add", format!("add {key} = {value}")).await
    }

    async fn remove(&self, key: &str) -> Result<(), ClientError> {
        self.respond("remove", format!("remove {key}")).await
    }
}

// ===== 测试工厂 =====

/// 用给定的初始条目创建上下文，返回上下文、mock 客户端和反馈渲染器
pub fn create_test_context(
    messages: &[(&str, &str)],
) -> (Arc<EditorContext>, Arc<MockCatalogueClient>, InMemoryFeedback) {
    let client = Arc::new(MockCatalogueClient::new());
    let feedback = InMemoryFeedback::new();
    let ctx = Arc::new(EditorContext::new(
        Arc::clone(&client) as Arc<dyn CatalogueClient>,
        Arc::new(feedback.clone()),
        CatalogueView::from_messages(messages.iter().copied()),
    ));
    (ctx, client, feedback)
}
