//! HTTP response types for the Lexicon API.
//!
//! Maps core errors to status codes and catalog messages, and
//! renders both successful and failed outcomes as JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::LexiconError;
use crate::core::messages::MessageSource;
use crate::core::types::MessageResponse;

/// Convert error to appropriate HTTP status code
pub fn status_code(err: &LexiconError) -> StatusCode {
    if err.is_bad_request() {
        StatusCode::BAD_REQUEST
    } else if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.is_conflict() {
        StatusCode::CONFLICT
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Successful API response
#[derive(Debug)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: MessageResponse,
}

impl ApiReply {
    pub fn new(status: StatusCode, body: MessageResponse) -> Self {
        Self { status, body }
    }
}

impl IntoResponse for ApiReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Failed API response
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: MessageResponse,
}

impl ApiError {
    /// Build the client response for a core error
    ///
    /// Errors without a catalog message fall back to their display
    /// text.
    pub fn from_error(
        err: &LexiconError,
        messages: &dyn MessageSource,
        request_count: Option<u64>,
    ) -> Self {
        let message = match err.message_id() {
            Some(id) => {
                let args = err.message_args();
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                messages.render(id, &args)
            }
            None => err.message(),
        };

        let mut body = MessageResponse::new(message);
        body.request_count = request_count;

        Self {
            status: status_code(err),
            body,
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
