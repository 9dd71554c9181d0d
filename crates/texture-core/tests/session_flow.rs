#![allow(unused_crate_dependencies)]
#![allow(clippy::expect_used, reason = "integration test, panics are the assertion mechanism")]

use std::sync::Arc;

use async_trait::async_trait;
use texture_client::{ClientConfig, MessagesClient};
use texture_core::{AssistantBackend, QueryClient, SearchSession, StructuringClient, TrustPolicy};
use texture_types::{RawContentBlock, RawSearchItem, SearchError, SessionState, TrustedReference};
use tokio::sync::Notify;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn result_set(url: &str, title: &str) -> Vec<RawContentBlock> {
    vec![RawContentBlock::SearchResultSet {
        items: vec![RawSearchItem {
            title: Some(title.to_string()),
            url: Some(url.to_string()),
            snippet: None,
        }],
    }]
}

/// Holds searches for "a" until released; answers everything else at once.
struct GatedQuery {
    started: Notify,
    release: Notify,
    fail_a: bool,
}

impl GatedQuery {
    fn new(fail_a: bool) -> Self {
        Self { started: Notify::new(), release: Notify::new(), fail_a }
    }
}

#[async_trait]
impl QueryClient for GatedQuery {
    async fn search(&self, topic: &str) -> Result<Vec<RawContentBlock>, SearchError> {
        if topic == "a" {
            self.started.notify_one();
            self.release.notified().await;
            if self.fail_a {
                return Err(SearchError::transport("connection reset"));
            }
            return Ok(result_set("https://ambientcg.com/view?id=A", "Texture A - ambientCG"));
        }
        Ok(result_set("https://polyhaven.com/a/texture_b", "Texture B - Poly Haven"))
    }
}

/// Always returns unparseable text so records come from the references.
struct Unstructured;

#[async_trait]
impl StructuringClient for Unstructured {
    async fn structure(
        &self,
        _topic: &str,
        _refs: &[TrustedReference],
        _context: &str,
    ) -> Result<String, SearchError> {
        Ok("not json".to_string())
    }
}

async fn superseded_run(fail_a: bool) {
    let query = Arc::new(GatedQuery::new(fail_a));
    let session = Arc::new(SearchSession::new(query.clone(), Arc::new(Unstructured)));

    let first = tokio::spawn({
        let session = session.clone();
        async move { session.run_search("a").await }
    });

    query.started.notified().await;
    assert!(session.state().is_loading());

    let second = session.run_search("b").await.expect("latest search commits");
    query.release.notify_one();
    let first = first.await.expect("task completes");

    assert_eq!(first, None, "superseded search must not commit");
    assert_eq!(session.state(), second);
    assert_eq!(session.state().records()[0].page_url, "https://polyhaven.com/a/texture_b");
    assert_eq!(session.generation(), 2);
}

#[tokio::test]
async fn test_superseded_success_is_discarded() {
    superseded_run(false).await;
}

#[tokio::test]
async fn test_superseded_failure_is_discarded() {
    superseded_run(true).await;
}

#[tokio::test]
async fn test_repeated_search_is_idempotent() {
    let query = Arc::new(GatedQuery::new(false));
    let session = SearchSession::new(query, Arc::new(Unstructured));

    let first = session.run_search("b").await.expect("commits");
    let second = session.run_search("b").await.expect("commits");

    assert_eq!(first, second);
    assert!(matches!(first, SessionState::Success(ref records) if records.len() == 1));
}

#[tokio::test]
async fn test_subscriber_observes_terminal_state() {
    let session = SearchSession::new(Arc::new(GatedQuery::new(false)), Arc::new(Unstructured));
    let mut rx = session.subscribe();

    session.run_search("b").await;

    assert!(rx.has_changed().expect("sender alive"));
    assert!(rx.borrow_and_update().is_terminal());
}

fn messages_body(content: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_test",
        "model": "claude-sonnet-4-20250514",
        "content": content,
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 1, "output_tokens": 1}
    })
}

async fn backend_session(server: &MockServer) -> SearchSession {
    let config = ClientConfig {
        base_url: server.uri(),
        api_key: "sk-test".to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    let client = MessagesClient::new(config).expect("valid config");
    let backend = Arc::new(AssistantBackend::new(client, TrustPolicy::default()));
    SearchSession::new(backend.clone(), backend)
}

#[tokio::test]
async fn test_full_pipeline_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_string_contains("Search for free 4K oak wood textures"))
        .and(body_string_contains("web_search_20250305"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_body(serde_json::json!([
            {"type": "web_search_tool_result", "tool_use_id": "srvtoolu_1", "content": [
                {"type": "web_search_result", "title": "Oak Planks - AmbientCG", "url": "https://ambientcg.com/view?id=Planks012"},
                {"type": "web_search_result", "title": "Oak stock photo", "url": "https://stockphotos.example/oak"}
            ]},
            {"type": "text", "text": "ambientCG has several oak plank sets."}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_string_contains("create a JSON array"))
        .and(body_string_contains("Oak Planks - AmbientCG: https://ambientcg.com/view?id=Planks012"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages_body(serde_json::json!([
            {"type": "text", "text": "```json\n[{\"title\": \"Oak Planks 012\", \"source\": \"ambientCG\", "},
            {"type": "text", "text": "\"pageUrl\": \"https://ambientcg.com/view?id=Planks012\", \"searchTerm\": \"oak planks\"}]\n```"}
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let session = backend_session(&server).await;
    let state = session.run_search("oak wood").await.expect("commits");

    let records = state.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Oak Planks 012");
    assert_eq!(records[0].source, "ambientCG");
    assert!(records[0].preview_url.contains("sig=0"));
}

#[tokio::test]
async fn test_http_failure_surfaces_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let session = backend_session(&server).await;
    let state = session.run_search("granite").await.expect("commits");

    assert_eq!(state, SessionState::Failed("Search failed. Please try again.".to_string()));
}
