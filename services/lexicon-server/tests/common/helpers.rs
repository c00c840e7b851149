// Test helper functions

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use lexicon::core::config::Config;
use lexicon::core::services::Services;
use lexicon::core::types::MessageResponse;
use lexicon::http;
use tower::ServiceExt as TowerServiceExt;

/// Create test services with a fresh in-memory store
#[allow(dead_code)]
pub fn create_test_services() -> Arc<Services> {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;

    Arc::new(Services::new(config).expect("Failed to create services"))
}

/// Create a router together with the services behind it
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<Services>) {
    let services = create_test_services();
    (http::build_router(Arc::clone(&services)), services)
}

/// Status, headers and raw body of a response
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl TestResponse {
    /// Parse the body as the standard API message
    pub fn message(&self) -> MessageResponse {
        serde_json::from_slice(&self.body).expect("Body is not a MessageResponse")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Send a request with an arbitrary method and no body
#[allow(dead_code)]
pub async fn request(app: &Router, method: Method, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> TestResponse {
    request(app, Method::GET, uri).await
}

#[allow(dead_code)]
pub async fn options(app: &Router, uri: &str) -> TestResponse {
    request(app, Method::OPTIONS, uri).await
}

/// POST a JSON value
#[allow(dead_code)]
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> TestResponse {
    post_raw(app, uri, body.to_string()).await
}

/// POST an arbitrary body with a JSON content type
#[allow(dead_code)]
pub async fn post_raw(app: &Router, uri: &str, body: impl Into<Body>) -> TestResponse {
    send(
        app,
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
}

/// Parse a response body as loose JSON
#[allow(dead_code)]
pub fn read_json(response: &TestResponse) -> serde_json::Value {
    serde_json::from_slice(&response.body).expect("Body is not JSON")
}

/// POST a body without any content type header
#[allow(dead_code)]
pub async fn request_with_body(app: &Router, uri: &str, body: impl Into<Body>) -> TestResponse {
    send(
        app,
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(body.into())
            .unwrap(),
    )
    .await
}
