//! Client integration tests against a minimal in-process API server.
//!
//! The server is a small `axum` router on a random local port serving the
//! four endpoint shapes the client consumes. The client's builder takes a
//! base URL override so it can be pointed here instead of the public API.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use lexigraph_conceptnet::{ConceptNetClient, ConceptNetError};
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Default)]
struct ApiState {
    /// Requests served per path, for cache/retry assertions.
    hits: AtomicUsize,
    /// Number of leading requests to fail with 503.
    fail_first: AtomicUsize,
}

struct FakeApi {
    addr: SocketAddr,
    state: Arc<ApiState>,
}

impl FakeApi {
    async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(ApiState::default());

        let app = Router::new()
            .route("/c/en/:term", get(concept))
            .route("/query", get(query))
            .route("/related/c/en/:term", get(related))
            .route("/relatedness", get(relatedness))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn client(&self) -> ConceptNetClient {
        ConceptNetClient::builder()
            .base_url(self.base_url())
            .max_attempts(3)
            .build()
            .expect("client")
    }

    fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    fn fail_first(&self, n: usize) {
        self.state.fail_first.store(n, Ordering::SeqCst);
    }
}

fn gate(state: &ApiState) -> Result<(), StatusCode> {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let remaining = state.fail_first.load(Ordering::SeqCst);
    if remaining > 0 {
        state.fail_first.store(remaining - 1, Ordering::SeqCst);
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    Ok(())
}

async fn concept(
    Path(term): Path<String>,
    State(state): State<Arc<ApiState>>,
) -> impl IntoResponse {
    if let Err(status) = gate(&state) {
        return (status, Json(json!({})));
    }
    if term == "quasar" {
        return (StatusCode::OK, Json(json!({ "edges": [] })));
    }
    let body = json!({
        "edges": [
            {
                "rel": {"label": "IsA", "@id": "/r/IsA"},
                "start": {"label": term, "term": format!("/c/en/{term}")},
                "end": {"label": "animal", "term": "/c/en/animal"},
                "weight": 2.5,
                "surfaceText": format!("[[a {term}]] is [[an animal]]")
            },
            {
                "rel": {"label": "AtLocation", "@id": "/r/AtLocation"},
                "start": {"label": term, "term": format!("/c/en/{term}")},
                "end": {"label": "kennel", "term": "/c/en/kennel"},
                "weight": 1.0
            }
        ]
    });
    (StatusCode::OK, Json(body))
}

async fn query(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<ApiState>>,
) -> impl IntoResponse {
    if let Err(status) = gate(&state) {
        return (status, Json(json!({})));
    }
    let node = params.get("node").cloned().unwrap_or_default();
    let other = params.get("other").cloned().unwrap_or_default();
    let body = json!({
        "edges": [{
            "rel": {"label": "CapableOf", "@id": "/r/CapableOf"},
            "start": {"@id": node},
            "end": {"@id": other},
            "weight": 3.2,
            "surfaceText": "[[dog]] can [[bark]]"
        }]
    });
    (StatusCode::OK, Json(body))
}

async fn related(
    Path(term): Path<String>,
    State(state): State<Arc<ApiState>>,
) -> impl IntoResponse {
    if let Err(status) = gate(&state) {
        return (status, Json(json!({})));
    }
    let body = json!({
        "@id": format!("/c/en/{term}"),
        "related": [
            {"@id": "/c/en/puppy", "weight": 0.9},
            {"@id": "/c/en/cat", "weight": 0.6}
        ]
    });
    (StatusCode::OK, Json(body))
}

async fn relatedness(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<ApiState>>,
) -> impl IntoResponse {
    if let Err(status) = gate(&state) {
        return (status, Json(json!({})));
    }
    let value = if params.get("node1") == params.get("node2") {
        1.0
    } else {
        0.42
    };
    (StatusCode::OK, Json(json!({ "value": value })))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edges_for_decodes_and_orders() {
    let api = FakeApi::start().await.unwrap();
    let client = api.client();

    let edges = client.edges_for("dog").await.unwrap();
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].relation, "IsA");
    assert_eq!(edges[0].end, "animal");
    assert_eq!(edges[1].surface_text, None);
}

#[tokio::test]
async fn edges_for_unknown_concept_is_empty_not_error() {
    let api = FakeApi::start().await.unwrap();
    let edges = api.client().edges_for("quasar").await.unwrap();
    assert!(edges.is_empty());
}

#[tokio::test]
async fn edges_between_sends_both_uris() {
    let api = FakeApi::start().await.unwrap();
    let edges = api.client().edges_between("dog", "bark").await.unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].relation, "CapableOf");
    // Labels resolved from the echoed concept URIs.
    assert_eq!(edges[0].start, "dog");
    assert_eq!(edges[0].end, "bark");
}

#[tokio::test]
async fn related_terms_queries_the_supplied_term() {
    let api = FakeApi::start().await.unwrap();
    let terms = api.client().related_terms("Tea Kettle").await.unwrap();
    assert_eq!(terms.len(), 2);
    assert_eq!(terms[0].term, "puppy");
    assert_eq!(terms[0].weight, 0.9);
}

#[tokio::test]
async fn relatedness_returns_score() {
    let api = FakeApi::start().await.unwrap();
    let score = api.client().relatedness("dog", "cat").await.unwrap();
    assert_eq!(score, 0.42);
    let same = api.client().relatedness("dog", "dog").await.unwrap();
    assert_eq!(same, 1.0);
}

#[tokio::test]
async fn transient_failures_are_retried() {
    let api = FakeApi::start().await.unwrap();
    api.fail_first(2);

    let edges = api.client().edges_for("dog").await.unwrap();
    assert_eq!(edges.len(), 2);
    // Two failures plus the successful attempt.
    assert_eq!(api.hits(), 3);
}

#[tokio::test]
async fn retries_are_bounded() {
    let api = FakeApi::start().await.unwrap();
    api.fail_first(10);

    let err = api.client().edges_for("dog").await.unwrap_err();
    match err {
        ConceptNetError::Status { status, .. } => assert_eq!(status, 503),
        other => panic!("expected Status error, got {other:?}"),
    }
    assert_eq!(api.hits(), 3);
}

#[tokio::test]
async fn repeated_queries_hit_the_cache() {
    let api = FakeApi::start().await.unwrap();
    let client = api.client();

    let first = client.edges_for("dog").await.unwrap();
    let second = client.edges_for("dog").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(api.hits(), 1);
}
