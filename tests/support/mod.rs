// Stub automation service for integration tests: records every request and
// answers with a fixed status and body.
#![allow(dead_code)]

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use linkedin_automation_client::{Reporter, RequestError};
use serde_json::Value;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("expected json request body")
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct StubService {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubService {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }

    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().expect("one request")
    }
}

pub async fn spawn_stub(status: u16, body: &str) -> StubService {
    spawn_stub_with_delay(status, body, None).await
}

// Bind to an ephemeral port and serve until the test runtime shuts down.
pub async fn spawn_stub_with_delay(status: u16, body: &str, delay: Option<Duration>) -> StubService {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status: StatusCode::from_u16(status).expect("valid status code"),
        body: body.to_string(),
        delay,
        requests: Arc::clone(&requests),
    };

    let app = Router::new().fallback(record).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    StubService {
        base_url: format!("http://{addr}"),
        requests,
    }
}

// Base URL of a port that was bound once and released, so connects are refused.
pub async fn refused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

async fn record(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .expect("requests mutex poisoned")
        .push(RecordedRequest {
            method,
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            content_type,
            body,
        });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

// Reporter that captures the outcome lines instead of printing them.
#[derive(Clone, Default)]
pub struct CapturingReporter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CapturingReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("lines mutex poisoned").clone()
    }
}

impl Reporter for CapturingReporter {
    fn success(&self, response: &Value) {
        self.lines
            .lock()
            .expect("lines mutex poisoned")
            .push(format!("Success: {response}"));
    }

    fn failure(&self, error: &RequestError) {
        self.lines
            .lock()
            .expect("lines mutex poisoned")
            .push(format!("Error: {error}"));
    }
}
