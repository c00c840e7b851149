//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the HTTP transport.
//!
//! # Architecture
//!
//! - **config**: Listening port resolution (argument + environment)
//! - **counter**: Handled-request counter
//! - **error**: Error types and Result alias
//! - **messages**: Message catalog and placeholder formatting
//! - **store**: Append-only word/definition store
//! - **types**: Request and response payloads
//! - **services**: Unified service container

pub mod config;
pub mod counter;
pub mod error;
pub mod messages;
pub mod services;
pub mod store;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{LexiconError, Result};
pub use services::Services;
