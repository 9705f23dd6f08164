//! 共享测试工具：本地假目录端点

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Context path the fake endpoint is mounted under
pub const CONTEXT_PATH: &str = "/xmlui";

/// One form submission as seen by the fake endpoint
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub fields: HashMap<String, String>,
}

#[derive(Default)]
struct FakeState {
    catalogue_id: String,
    messages: Vec<(String, String)>,
    requests: Vec<RecordedRequest>,
    /// Status forced for every request while set
    forced_status: Option<StatusCode>,
    /// Statuses answered to the next requests, one each
    queued_failures: Vec<StatusCode>,
}

type Shared = Arc<Mutex<FakeState>>;

/// In-process catalogue endpoint behaving like the real server:
/// `save` needs an existing key, `add` upserts, `remove` ignores unknown keys,
/// and an unknown catalogue id is a server error.
pub struct FakeCatalogue {
    pub base_url: String,
    state: Shared,
}

impl FakeCatalogue {
    pub async fn spawn(catalogue_id: &str, seed: &[(&str, &str)]) -> Self {
        let state: Shared = Arc::new(Mutex::new(FakeState {
            catalogue_id: catalogue_id.to_string(),
            messages: seed
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            ..FakeState::default()
        }));

        let router = Router::new()
            .route(&format!("{CONTEXT_PATH}/admin/catalogue/message/save"), post(save))
            .route(&format!("{CONTEXT_PATH}/admin/catalogue/message/add"), post(add))
            .route(
                &format!("{CONTEXT_PATH}/admin/catalogue/message/remove"),
                post(remove),
            )
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}{CONTEXT_PATH}"),
            state,
        }
    }

    pub async fn force_status(&self, status: Option<u16>) {
        self.state.lock().await.forced_status =
            status.map(|s| StatusCode::from_u16(s).unwrap());
    }

    /// Fail the next `times` requests with `status`, then behave normally
    pub async fn fail_next(&self, status: u16, times: usize) {
        let status = StatusCode::from_u16(status).unwrap();
        self.state.lock().await.queued_failures = vec![status; times];
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.requests.clone()
    }

    pub async fn message(&self, key: &str) -> Option<String> {
        self.state
            .lock()
            .await
            .messages
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    pub async fn message_count(&self) -> usize {
        self.state.lock().await.messages.len()
    }
}

/// Record the request and decide whether it may proceed.
async fn admit(
    state: &Shared,
    path: &str,
    fields: &HashMap<String, String>,
) -> Result<(), (StatusCode, String)> {
    let mut guard = state.lock().await;
    guard.requests.push(RecordedRequest {
        path: path.to_string(),
        fields: fields.clone(),
    });

    if let Some(status) = guard.forced_status {
        return Err((status, "forced failure".to_string()));
    }
    if let Some(status) = guard.queued_failures.pop() {
        return Err((status, "queued failure".to_string()));
    }

    let catalogue = fields.get("message-catalogue").cloned().unwrap_or_default();
    if catalogue != guard.catalogue_id {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Catalogue {catalogue} does not exist."),
        ));
    }
    Ok(())
}

async fn save(
    State(state): State<Shared>,
    Form(fields): Form<HashMap<String, String>>,
) -> (StatusCode, String) {
    if let Err(rejection) = admit(&state, "save", &fields).await {
        return rejection;
    }
    let key = fields.get("message-key").cloned().unwrap_or_default();
    let value = fields.get("message-value").cloned().unwrap_or_default();

    let mut guard = state.lock().await;
    match guard.messages.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => {
            entry.1 = value;
            (StatusCode::OK, String::new())
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Message node does not exist.".to_string(),
        ),
    }
}

async fn add(
    State(state): State<Shared>,
    Form(fields): Form<HashMap<String, String>>,
) -> (StatusCode, String) {
    if let Err(rejection) = admit(&state, "add", &fields).await {
        return rejection;
    }
    let key = fields.get("message-key").cloned().unwrap_or_default();
    let value = fields.get("message-value").cloned().unwrap_or_default();

    let mut guard = state.lock().await;
    match guard.messages.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => guard.messages.push((key, value)),
    }
    (StatusCode::OK, String::new())
}

async fn remove(
    State(state): State<Shared>,
    Form(fields): Form<HashMap<String, String>>,
) -> (StatusCode, String) {
    if let Err(rejection) = admit(&state, "remove", &fields).await {
        return rejection;
    }
    let key = fields.get("message-key").cloned().unwrap_or_default();
    state.lock().await.messages.retain(|(k, _)| *k != key);
    (StatusCode::OK, String::new())
}
