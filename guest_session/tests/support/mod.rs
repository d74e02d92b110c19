// Fake backend for exercising the reqwest client end to end.
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::post,
};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

// What the fake endpoint answers with and what it has seen.
#[derive(Clone)]
pub struct FakeBackend {
    pub base_url: String,
    seen_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeBackend {
    pub fn seen_queries(&self) -> Vec<HashMap<String, String>> {
        self.seen_queries
            .lock()
            .expect("queries mutex poisoned")
            .clone()
    }
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    body: Value,
    seen_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn anonymous_session(
    State(state): State<FakeState>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state
        .seen_queries
        .lock()
        .expect("queries mutex poisoned")
        .push(query);
    (state.status, Json(state.body.clone()))
}

// Start a fake backend on an ephemeral port inside the current runtime.
pub async fn spawn_backend(status: StatusCode, body: Value) -> FakeBackend {
    let seen_queries = Arc::new(Mutex::new(Vec::new()));
    let state = FakeState {
        status,
        body,
        seen_queries: seen_queries.clone(),
    };
    let app = Router::new()
        .route("/api/v1/auth/anonymous-session", post(anonymous_session))
        .with_state(state);

    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake backend failed");
    });

    FakeBackend {
        base_url: format!("http://{addr}"),
        seen_queries,
    }
}
