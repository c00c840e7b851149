//! Route table for the Lexicon API
//!
//! | Method  | Path                             | Handler        |
//! |---------|----------------------------------|----------------|
//! | OPTIONS | any                              | preflight, 204 |
//! | GET     | starts with `/api/definitions`   | lookup         |
//! | POST    | `/api/definitions`               | insert         |
//! | other   | any                              | 404            |
//!
//! Every response, including errors and the preflight, carries the
//! permissive CORS headers.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::core::services::Services;
use crate::http::handlers::{
    fallback_handler, insert_handler, lookup_handler, not_found_handler, preflight_handler,
    DEFINITIONS_PATH,
};
use crate::http::middleware::log_request;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Build the API router around shared services
pub fn build_router(services: Arc<Services>) -> Router {
    // get() would also answer HEAD; route it to the 404 explicitly
    let definitions = get(lookup_handler)
        .head(not_found_handler)
        .post(insert_handler)
        .options(preflight_handler)
        .fallback(not_found_handler);

    Router::new()
        .route(DEFINITIONS_PATH, definitions)
        .fallback(fallback_handler)
        .layer(middleware::from_fn(log_request))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .with_state(services)
}
