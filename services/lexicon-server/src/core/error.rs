//! Error types and error handling for the Lexicon service.
//!
//! This module defines the error types used throughout the
//! application. HTTP status codes and response bodies are handled
//! in the http adapter.

use thiserror::Error;

use crate::core::messages::MessageId;

/// Result type alias for Lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Main error type for the Lexicon service
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Word not found: {0}")]
    WordNotFound(String),

    #[error("Word already exists: {0}")]
    WordExists(String),

    #[error("Endpoint not found: {0}")]
    EndpointNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Message catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl LexiconError {
    /// Catalog message shown to clients for this error, if any
    pub fn message_id(&self) -> Option<MessageId> {
        match self {
            LexiconError::InvalidInput(_) => Some(MessageId::InvalidInput),
            LexiconError::WordNotFound(_) => Some(MessageId::WordNotFound),
            LexiconError::WordExists(_) => Some(MessageId::WordExists),
            LexiconError::EndpointNotFound(_) => Some(MessageId::EndpointNotFound),
            _ => None,
        }
    }

    /// Positional arguments for the catalog message
    pub fn message_args(&self) -> Vec<String> {
        match self {
            LexiconError::WordNotFound(word) | LexiconError::WordExists(word) => {
                vec![word.clone()]
            }
            _ => Vec::new(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LexiconError::WordNotFound(_) | LexiconError::EndpointNotFound(_)
        )
    }

    /// Check if this is a conflict error (already exists)
    pub fn is_conflict(&self) -> bool {
        matches!(self, LexiconError::WordExists(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, LexiconError::InvalidInput(_))
    }
}
