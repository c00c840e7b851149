//! Client-facing message catalog.
//!
//! Messages are looked up by symbolic [`MessageId`] and rendered by
//! substituting `%1`, `%2`, ... placeholders with positional
//! arguments. The English table is embedded from `lang/en.toml`.

use std::collections::HashMap;

use serde::Deserialize;

use crate::core::error::{LexiconError, Result};

/// Embedded English message table
const EN_CATALOG: &str = include_str!("../../lang/en.toml");

/// Symbolic identifiers for every client-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    WordExists,
    NewEntryRecorded,
    WordDefinition,
    WordNotFound,
    InvalidInput,
    EndpointNotFound,
}

impl MessageId {
    /// All message identifiers, used to check catalog completeness
    pub const ALL: [MessageId; 6] = [
        MessageId::WordExists,
        MessageId::NewEntryRecorded,
        MessageId::WordDefinition,
        MessageId::WordNotFound,
        MessageId::InvalidInput,
        MessageId::EndpointNotFound,
    ];

    /// Key of the message inside its catalog section
    pub fn key(self) -> &'static str {
        match self {
            MessageId::WordExists => "wordExists",
            MessageId::NewEntryRecorded => "newEntryRecorded",
            MessageId::WordDefinition => "wordDefinition",
            MessageId::WordNotFound => "wordNotFound",
            MessageId::InvalidInput => "invalidInput",
            MessageId::EndpointNotFound => "endpointNotFound",
        }
    }

    /// Catalog section holding the message
    pub fn section(self) -> &'static str {
        match self {
            MessageId::WordExists
            | MessageId::WordNotFound
            | MessageId::InvalidInput
            | MessageId::EndpointNotFound => "errors",
            MessageId::NewEntryRecorded => "success",
            MessageId::WordDefinition => "info",
        }
    }
}

/// Lookup capability consumed by the HTTP handlers
pub trait MessageSource: Send + Sync {
    /// Raw template for a message
    fn template(&self, id: MessageId) -> &str;

    /// Template with positional arguments substituted
    fn render(&self, id: MessageId, args: &[&str]) -> String {
        format_message(self.template(id), args)
    }
}

/// Raw TOML layout: `[errors]`, `[success]`, `[info]` tables
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    errors: HashMap<String, String>,
    #[serde(default)]
    success: HashMap<String, String>,
    #[serde(default)]
    info: HashMap<String, String>,
}

/// Message templates keyed by [`MessageId`]
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    templates: HashMap<MessageId, String>,
}

impl MessageCatalog {
    /// Load the embedded English catalog
    pub fn english() -> Result<Self> {
        Self::from_toml(EN_CATALOG)
    }

    /// Parse a catalog from TOML text
    ///
    /// Every [`MessageId`] must be present in its section; unknown
    /// keys are ignored.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut file: CatalogFile = toml::from_str(contents)?;

        let mut templates = HashMap::with_capacity(MessageId::ALL.len());
        for id in MessageId::ALL {
            let section = match id.section() {
                "errors" => &mut file.errors,
                "success" => &mut file.success,
                _ => &mut file.info,
            };
            let template = section.remove(id.key()).ok_or_else(|| {
                LexiconError::Catalog(format!("missing message {}.{}", id.section(), id.key()))
            })?;
            templates.insert(id, template);
        }

        Ok(Self { templates })
    }
}

impl MessageSource for MessageCatalog {
    fn template(&self, id: MessageId) -> &str {
        // from_toml guarantees every id is present
        self.templates.get(&id).map(String::as_str).unwrap_or("")
    }
}

/// Substitute `%N` placeholders with `args[N - 1]`
///
/// Indices may have several digits. Placeholders without a matching
/// argument, `%0` and a lone `%` are kept verbatim. Substituted text
/// is not scanned again.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        let arg = after[..digits]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| args.get(i));

        match arg {
            Some(value) => out.push_str(value),
            None => {
                out.push('%');
                out.push_str(&after[..digits]);
            }
        }
        rest = &after[digits..];
    }

    out.push_str(rest);
    out
}
