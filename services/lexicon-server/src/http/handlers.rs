//! HTTP request handlers for the Lexicon API
//!
//! Implements the definitions endpoints (lookup and insert), the
//! CORS preflight and the catch-all for unknown routes.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::core::error::LexiconError;
use crate::core::messages::MessageId;
use crate::core::services::Services;
use crate::core::types::{DefinitionRequest, MessageResponse};
use crate::http::error::{ApiError, ApiReply};

/// Path of the definitions resource
pub const DEFINITIONS_PATH: &str = "/api/definitions";

/// Query parameter carrying the looked-up word
pub const WORD_PARAM: &str = "word";

/// First `word` parameter of the request URI, percent-decoded
fn word_param(uri: &Uri) -> Option<String> {
    let Query(params) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;
    params
        .into_iter()
        .find(|(key, _)| key == WORD_PARAM)
        .map(|(_, value)| value)
}

/// Lookup flow shared by the exact route and prefixed GET paths
fn lookup(services: &Services, uri: &Uri) -> Result<ApiReply, ApiError> {
    let word = word_param(uri);
    let request_count = services.requests.increment();

    let entry = word.as_deref().and_then(|w| services.store.find(w));

    match entry {
        Some(entry) => {
            let message = services.messages.render(
                MessageId::WordDefinition,
                &[entry.word.as_str(), entry.definition.as_str()],
            );
            Ok(ApiReply::new(
                StatusCode::OK,
                MessageResponse::new(message).with_request_count(request_count),
            ))
        }
        None => {
            let err = LexiconError::WordNotFound(word.unwrap_or_default());
            Err(ApiError::from_error(
                &err,
                services.messages.as_ref(),
                Some(request_count),
            ))
        }
    }
}

/// Lookup handler
///
/// Returns the definition of the `word` query parameter, matched
/// case-insensitively. Every call counts as a handled request,
/// including misses and a missing parameter.
///
/// # Errors
///
/// - `WordNotFound` (404): no entry for the word, or no word given
pub async fn lookup_handler(
    State(services): State<Arc<Services>>,
    uri: Uri,
) -> Result<ApiReply, ApiError> {
    lookup(&services, &uri)
}

/// Insert handler
///
/// Records a new word/definition pair from a JSON body
/// `{"word": ..., "definition": ...}`. The request is counted before
/// the body is parsed, so rejected inserts are counted too.
///
/// # Returns
///
/// 201 with the new total entry count on success
///
/// # Errors
///
/// - `InvalidInput` (400): unreadable or oversized body, malformed
///   JSON, missing or empty field, or a digit in the word
/// - `WordExists` (409): the word is already stored in some casing
pub async fn insert_handler(
    State(services): State<Arc<Services>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<ApiReply, ApiError> {
    let request_count = services.requests.increment();
    let reject = |err: LexiconError| {
        ApiError::from_error(&err, services.messages.as_ref(), Some(request_count))
    };

    let body = body.map_err(|e| LexiconError::InvalidInput(format!("unreadable body: {e}")));

    let valid = body
        .and_then(|body| DefinitionRequest::from_slice(&body))
        .and_then(DefinitionRequest::validate)
        .map_err(|e| {
            tracing::debug!(error = %e, "Rejected definition request");
            reject(e)
        })?;

    let inserted = services
        .store
        .insert(&valid.word, &valid.definition)
        .map_err(reject)?;

    let count = request_count.to_string();
    let message = services.messages.render(
        MessageId::NewEntryRecorded,
        &[
            inserted.entry.word.as_str(),
            inserted.entry.definition.as_str(),
            count.as_str(),
        ],
    );

    Ok(ApiReply::new(
        StatusCode::CREATED,
        MessageResponse::new(message)
            .with_request_count(request_count)
            .with_total_entries(inserted.total_entries),
    ))
}

/// CORS preflight handler
///
/// Answers any OPTIONS request with an empty 204. The CORS headers
/// themselves are added by the router layers.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Unknown endpoint handler
///
/// Does not touch the request counter.
pub async fn not_found_handler(State(services): State<Arc<Services>>, uri: Uri) -> ApiError {
    let err = LexiconError::EndpointNotFound(uri.path().to_string());
    ApiError::from_error(&err, services.messages.as_ref(), None)
}

/// Catch-all for paths other than the exact definitions route
///
/// OPTIONS is answered everywhere and GET matches any path starting
/// with the definitions prefix; everything else is a 404.
pub async fn fallback_handler(
    State(services): State<Arc<Services>>,
    method: Method,
    uri: Uri,
) -> Response {
    if method == Method::OPTIONS {
        return preflight_handler().await.into_response();
    }

    if method == Method::GET && uri.path().starts_with(DEFINITIONS_PATH) {
        return lookup(&services, &uri).into_response();
    }

    not_found_handler(State(services), uri).await.into_response()
}
