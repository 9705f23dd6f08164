#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `EditorStateBuilder` and the editor flows over real HTTP.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use message_catalogue_app::{EditorConfig, EditorStateBuilder, PageContext};
use message_catalogue_core::error::CoreError;
use message_catalogue_core::services::{DialogPhase, LocalRejection, RowOutcome};
use message_catalogue_core::traits::InMemoryFeedback;
use message_catalogue_core::types::{Banner, FeedbackKind, RowState};
use tokio::sync::Mutex;

const CATALOGUE: &str = "6F1ED002AB5595859014EBF0951522D9";

// ===== Fake catalogue endpoint =====

#[derive(Default)]
struct Endpoint {
    messages: HashMap<String, String>,
    failing: bool,
}

type Shared = Arc<Mutex<Endpoint>>;

async fn handle(
    state: &Shared,
    fields: &HashMap<String, String>,
    apply: impl FnOnce(&mut HashMap<String, String>, String, Option<String>) -> bool,
) -> StatusCode {
    let mut endpoint = state.lock().await;
    if endpoint.failing || fields.get("message-catalogue").map(String::as_str) != Some(CATALOGUE)
    {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    let key = fields.get("message-key").cloned().unwrap_or_default();
    let value = fields.get("message-value").cloned();
    if apply(&mut endpoint.messages, key, value) {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

async fn spawn_endpoint(seed: &[(&str, &str)]) -> (String, Shared) {
    let state: Shared = Arc::new(Mutex::new(Endpoint {
        messages: seed
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
        failing: false,
    }));

    let router = Router::new()
        .route(
            "/xmlui/admin/catalogue/message/save",
            post(
                |State(s): State<Shared>, Form(f): Form<HashMap<String, String>>| async move {
                    handle(&s, &f, |messages, key, value| match messages.get_mut(&key) {
                        Some(v) => {
                            *v = value.unwrap_or_default();
                            true
                        }
                        None => false,
                    })
                    .await
                },
            ),
        )
        .route(
            "/xmlui/admin/catalogue/message/add",
            post(
                |State(s): State<Shared>, Form(f): Form<HashMap<String, String>>| async move {
                    handle(&s, &f, |messages, key, value| {
                        messages.insert(key, value.unwrap_or_default());
                        true
                    })
                    .await
                },
            ),
        )
        .route(
            "/xmlui/admin/catalogue/message/remove",
            post(
                |State(s): State<Shared>, Form(f): Form<HashMap<String, String>>| async move {
                    handle(&s, &f, |messages, key, _| {
                        messages.remove(&key);
                        true
                    })
                    .await
                },
            ),
        )
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{addr}/xmlui"), state)
}

fn page_url(base: &str) -> String {
    PageContext::editor_url(base, CATALOGUE).unwrap()
}

// ===== Builder =====

#[test]
fn build_requires_page_url() {
    let result = EditorStateBuilder::new()
        .config(EditorConfig::new("http://localhost/xmlui"))
        .build();
    assert!(matches!(result, Err(CoreError::ValidationError(ref m)) if m.contains("page_url")));
}

#[test]
fn build_requires_catalogue_parameter() {
    let result = EditorStateBuilder::new()
        .config(EditorConfig::new("http://localhost/xmlui"))
        .page_url("http://localhost/xmlui/admin/catalogue/messages")
        .build();
    assert!(matches!(result, Err(CoreError::ValidationError(_))));
}

#[test]
fn build_requires_config_without_injected_client() {
    let result = EditorStateBuilder::new()
        .page_url(page_url("http://localhost/xmlui"))
        .build();
    assert!(matches!(result, Err(CoreError::ValidationError(ref m)) if m.contains("config")));
}

#[test]
fn bad_base_path_surfaces_client_error() {
    let result = EditorStateBuilder::new()
        .config(EditorConfig::new("xmlui"))
        .page_url(page_url("http://localhost/xmlui"))
        .build();
    assert!(matches!(result, Err(CoreError::Client(_))));
}

#[tokio::test]
async fn build_seeds_view_and_threads_catalogue_id() {
    let state = EditorStateBuilder::new()
        .config(EditorConfig::new("http://localhost/xmlui"))
        .page_url(page_url("http://localhost/xmlui"))
        .initial_messages([("a", "1"), ("", "skipped"), ("b", "2"), ("a", "dup")])
        .build()
        .unwrap();

    assert_eq!(state.catalogue_id(), CATALOGUE);
    assert_eq!(state.ctx.catalogue_id(), CATALOGUE);
    assert_eq!(state.ctx.len().await, 2);
    assert_eq!(state.ctx.entry("a").await.unwrap().value, "1");
}

// ===== End to end =====

#[tokio::test]
async fn edit_save_add_delete_round_trip() {
    let (base, endpoint) = spawn_endpoint(&[("jsp.layout.header", "Old")]).await;
    let feedback = InMemoryFeedback::new();
    let state = EditorStateBuilder::new()
        .config(EditorConfig::new(&base))
        .page_url(page_url(&base))
        .initial_messages([("jsp.layout.header", "Old")])
        .feedback(Arc::new(feedback.clone()))
        .build()
        .unwrap();
    let rows = &state.row_service;

    // save
    rows.begin_edit("jsp.layout.header").await.unwrap();
    let outcome = rows
        .request_save("jsp.layout.header", "<i>New</i>")
        .await
        .unwrap();
    assert_eq!(outcome, RowOutcome::Completed(FeedbackKind::Success));
    assert_eq!(
        state.ctx.entry("jsp.layout.header").await.unwrap().value,
        "<i>New</i>"
    );
    assert_eq!(
        endpoint.lock().await.messages["jsp.layout.header"],
        "<i>New</i>"
    );
    assert_eq!(
        feedback.indicator("jsp.layout.header").await.map(|i| i.kind),
        Some(FeedbackKind::Success)
    );

    // add
    state.add_service.open().await;
    let outcome = state
        .add_service
        .request_add("new.key", "Hello &amp; <b>welcome</b>")
        .await
        .unwrap();
    assert_eq!(outcome, RowOutcome::Completed(FeedbackKind::Success));
    assert_eq!(state.ctx.len().await, 2);
    assert_eq!(state.add_service.dialog().await.phase, DialogPhase::Closed);
    assert_eq!(
        endpoint.lock().await.messages["new.key"],
        "Hello &amp; <b>welcome</b>"
    );

    // delete
    rows.request_delete("new.key").await.unwrap();
    let outcome = rows.confirm_delete("new.key").await.unwrap();
    assert_eq!(outcome, RowOutcome::Completed(FeedbackKind::Success));
    assert!(state.ctx.entry("new.key").await.is_none());
    assert!(!endpoint.lock().await.messages.contains_key("new.key"));
    assert_eq!(
        feedback.notifications().visible().await,
        Some(Banner::DeleteSucceeded)
    );
}

#[tokio::test]
async fn server_failures_leave_stored_data_unchanged() {
    let (base, endpoint) = spawn_endpoint(&[("k", "Old")]).await;
    let feedback = InMemoryFeedback::new();
    let state = EditorStateBuilder::new()
        .config(EditorConfig::new(&base))
        .page_url(page_url(&base))
        .initial_messages([("k", "Old")])
        .feedback(Arc::new(feedback.clone()))
        .build()
        .unwrap();
    endpoint.lock().await.failing = true;

    state.row_service.begin_edit("k").await.unwrap();
    let outcome = state.row_service.request_save("k", "New").await.unwrap();
    assert_eq!(outcome, RowOutcome::Completed(FeedbackKind::Failure));
    let entry = state.ctx.entry("k").await.unwrap();
    assert_eq!(entry.value, "Old");
    assert_eq!(entry.row_state, RowState::Viewing);
    assert_eq!(
        feedback.notifications().visible().await,
        Some(Banner::SaveFailed)
    );

    let outcome = state.add_service.request_add("other", "x").await.unwrap();
    assert_eq!(outcome, RowOutcome::Completed(FeedbackKind::Failure));
    assert_eq!(state.ctx.len().await, 1);

    state.row_service.request_delete("k").await.unwrap();
    let outcome = state.row_service.confirm_delete("k").await.unwrap();
    assert_eq!(outcome, RowOutcome::Completed(FeedbackKind::Failure));
    assert_eq!(state.ctx.row_state("k").await, Some(RowState::Viewing));
}

#[tokio::test]
async fn local_rejections_issue_no_requests() {
    let (base, endpoint) = spawn_endpoint(&[("k", "Old")]).await;
    let state = EditorStateBuilder::new()
        .config(EditorConfig::new(&base))
        .page_url(page_url(&base))
        .initial_messages([("k", "Old")])
        .build()
        .unwrap();
    // Any request that got through would now fail and change the outcome
    endpoint.lock().await.failing = true;

    state.row_service.begin_edit("k").await.unwrap();
    assert_eq!(
        state.row_service.request_save("k", "<i>").await.unwrap(),
        RowOutcome::Rejected(LocalRejection::InvalidContent)
    );
    assert_eq!(state.ctx.row_state("k").await, Some(RowState::Editing));
    assert_eq!(
        state.add_service.request_add(" ", "v").await.unwrap(),
        RowOutcome::Rejected(LocalRejection::KeyRequired)
    );
    assert_eq!(endpoint.lock().await.messages["k"], "Old");
}
