//! Unified service container for Lexicon
//!
//! Owns the store, the message catalog and the request counter.
//! Nothing here is global: every `Services` value is an independent
//! dictionary, so several servers can run side by side in tests.

use crate::core::config::Config;
use crate::core::counter::RequestCounter;
use crate::core::error::Result;
use crate::core::messages::{MessageCatalog, MessageSource};
use crate::core::store::DefinitionStore;
use std::sync::Arc;

/// Unified services container
///
/// Handlers receive this struct as shared state.
#[derive(Clone)]
pub struct Services {
    /// Word/definition store
    pub store: Arc<DefinitionStore>,

    /// Client-facing message templates
    pub messages: Arc<dyn MessageSource>,

    /// Handled lookup/insert requests
    pub requests: Arc<RequestCounter>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services using the embedded English catalog
    pub fn new(config: Config) -> Result<Self> {
        let messages = MessageCatalog::english()?;
        Ok(Self::with_messages(config, Arc::new(messages)))
    }

    /// Create services with a caller-supplied message source
    pub fn with_messages(config: Config, messages: Arc<dyn MessageSource>) -> Self {
        Self {
            store: Arc::new(DefinitionStore::new()),
            messages,
            requests: Arc::new(RequestCounter::new()),
            config: Arc::new(config),
        }
    }
}
