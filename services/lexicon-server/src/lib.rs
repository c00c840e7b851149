//! Lexicon - word/definition store over HTTP
//!
//! An in-memory dictionary service: clients look up a definition by
//! word or register a new word/definition pair. Words are unique
//! case-insensitively and entries are write-once.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, messages
//!   - store (append-only entries, case-insensitive lookup)
//!   - counter (handled-request counter)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, router, middleware, error responses
//!
//! - **cli**: startup argument parsing
//!
//! State is in memory only and resets on restart.

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line arguments
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{LexiconError, Result};
pub use crate::core::services::Services;
pub use crate::core::store::{DefinitionStore, Entry};
