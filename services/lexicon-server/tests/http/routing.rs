//! Routing table, CORS headers and request counting
//!
//! Unmatched routes and preflights must leave the counter alone;
//! every response carries the CORS headers.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{create_test_app, get, options, post_json, request, TestResponse};

fn assert_cors(response: &TestResponse) {
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(
        response.header("access-control-allow-methods"),
        Some("GET, POST, OPTIONS")
    );
    assert_eq!(
        response.header("access-control-allow-headers"),
        Some("Content-Type")
    );
}

#[tokio::test]
async fn test_options_any_path() {
    let (app, services) = create_test_app();

    for path in ["/api/definitions", "/", "/anything/else", "/api/definitions/x"] {
        let response = options(&app, path).await;
        assert_eq!(response.status, StatusCode::NO_CONTENT, "OPTIONS {path}");
        assert!(response.body.is_empty());
        assert_cors(&response);
    }

    assert_eq!(services.requests.current(), 0);
}

#[tokio::test]
async fn test_unknown_endpoint() {
    let (app, services) = create_test_app();

    let response = get(&app, "/api/words").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let body = response.message();
    assert!(!body.message.is_empty());
    assert!(body.request_count.is_none());
    assert_cors(&response);
    assert_eq!(services.requests.current(), 0);
}

#[tokio::test]
async fn test_unsupported_methods_are_not_found() {
    let (app, services) = create_test_app();

    for method in [Method::PUT, Method::DELETE, Method::PATCH, Method::HEAD] {
        let response = request(&app, method.clone(), "/api/definitions").await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{method}");
        assert_cors(&response);
    }

    assert_eq!(services.requests.current(), 0);
}

#[tokio::test]
async fn test_post_requires_exact_path() {
    let (app, services) = create_test_app();

    let response = post_json(
        &app,
        "/api/definitions/extra",
        json!({"word": "cat", "definition": "a feline"}),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(services.store.size(), 0);
    assert_eq!(services.requests.current(), 0);
}

#[tokio::test]
async fn test_get_matches_path_prefix() {
    let (app, services) = create_test_app();
    services.store.insert("cat", "a feline").unwrap();

    let response = get(&app, "/api/definitions/lookup?word=cat").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message().request_count, Some(1));

    let response = get(&app, "/api/definitionsXYZ?word=cat").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message().request_count, Some(2));
    assert_cors(&response);
}

#[tokio::test]
async fn test_counter_counts_only_get_and_post() {
    let (app, services) = create_test_app();

    post_json(&app, "/api/definitions", json!({"word": "cat", "definition": "a feline"})).await;
    options(&app, "/api/definitions").await;
    get(&app, "/nowhere").await;
    get(&app, "/api/definitions?word=cat").await;
    request(&app, Method::DELETE, "/api/definitions").await;
    post_json(&app, "/api/definitions", json!({"word": "a1", "definition": "x"})).await;

    assert_eq!(services.requests.current(), 3);

    let response = get(&app, "/api/definitions?word=missing").await;
    assert_eq!(response.message().request_count, Some(4));
}

#[tokio::test]
async fn test_cors_on_every_status() {
    let (app, _services) = create_test_app();

    let created =
        post_json(&app, "/api/definitions", json!({"word": "cat", "definition": "a feline"})).await;
    let conflict =
        post_json(&app, "/api/definitions", json!({"word": "Cat", "definition": "again"})).await;
    let invalid = post_json(&app, "/api/definitions", json!({"word": "", "definition": ""})).await;
    let found = get(&app, "/api/definitions?word=cat").await;
    let missing = get(&app, "/api/definitions?word=dog").await;

    for (response, status) in [
        (&created, StatusCode::CREATED),
        (&conflict, StatusCode::CONFLICT),
        (&invalid, StatusCode::BAD_REQUEST),
        (&found, StatusCode::OK),
        (&missing, StatusCode::NOT_FOUND),
    ] {
        assert_eq!(response.status, status);
        assert_cors(response);
    }
}

#[tokio::test]
async fn test_separate_apps_do_not_share_state() {
    let (app_a, services_a) = create_test_app();
    let (app_b, services_b) = create_test_app();

    post_json(&app_a, "/api/definitions", json!({"word": "cat", "definition": "a feline"})).await;

    let response = get(&app_b, "/api/definitions?word=cat").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message().request_count, Some(1));

    assert_eq!(services_a.store.size(), 1);
    assert_eq!(services_b.store.size(), 0);
}
