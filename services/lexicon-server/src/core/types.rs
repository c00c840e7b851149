//! Request and response payloads for the Lexicon API.

use serde::{Deserialize, Serialize};

use crate::core::error::{LexiconError, Result};

/// Body of `POST /api/definitions`
///
/// Both fields are optional at the parsing level so that a missing
/// field is reported as invalid input rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefinitionRequest {
    #[serde(default)]
    pub word: Option<String>,

    #[serde(default)]
    pub definition: Option<String>,
}

/// A definition request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDefinition {
    pub word: String,
    pub definition: String,
}

impl DefinitionRequest {
    /// Parse a raw request body
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: body is not a JSON object with string (or
    ///   null) `word`/`definition` fields
    ///
    /// The body goes through a `Value` first so a repeated key keeps
    /// its last occurrence instead of failing the struct derive.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let malformed =
            |e: serde_json::Error| LexiconError::InvalidInput(format!("malformed body: {e}"));

        let value: serde_json::Value = serde_json::from_slice(body).map_err(malformed)?;
        serde_json::from_value(value).map_err(malformed)
    }

    /// Check the request and return its fields
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: word or definition missing or empty, or the
    ///   word contains an ASCII digit
    pub fn validate(self) -> Result<ValidDefinition> {
        let word = self.word.unwrap_or_default();
        let definition = self.definition.unwrap_or_default();

        if word.is_empty() {
            return Err(LexiconError::InvalidInput("word is empty".to_string()));
        }
        if definition.is_empty() {
            return Err(LexiconError::InvalidInput("definition is empty".to_string()));
        }
        if word.chars().any(|c| c.is_ascii_digit()) {
            return Err(LexiconError::InvalidInput(format!(
                "word '{word}' contains a digit"
            )));
        }

        Ok(ValidDefinition { word, definition })
    }
}

/// JSON body of every API response except the preflight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_entries: Option<usize>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            request_count: None,
            total_entries: None,
        }
    }

    pub fn with_request_count(mut self, count: u64) -> Self {
        self.request_count = Some(count);
        self
    }

    pub fn with_total_entries(mut self, total: usize) -> Self {
        self.total_entries = Some(total);
        self
    }
}
