//! In-memory definition store.
//!
//! Entries are kept in insertion order and never modified or
//! removed. Word comparison is case-insensitive; the original
//! casing of an inserted word is preserved.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::error::{LexiconError, Result};

/// A stored word/definition pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub definition: String,
}

/// Outcome of a successful insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inserted {
    /// The entry as stored
    pub entry: Entry,

    /// Number of entries after the insert
    pub total_entries: usize,
}

/// Append-only word/definition store
///
/// Lookups take the read lock. Inserts run the duplicate check and
/// the append under a single write lock, so two concurrent inserts
/// of the same word cannot both succeed.
#[derive(Debug, Default)]
pub struct DefinitionStore {
    entries: RwLock<Vec<Entry>>,
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // push is the only mutation; a poisoned lock still guards a
    // consistent vector.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Find the entry whose word matches `word`, ignoring case
    pub fn find(&self, word: &str) -> Option<Entry> {
        let needle = word.to_lowercase();
        self.read()
            .iter()
            .find(|entry| entry.word.to_lowercase() == needle)
            .cloned()
    }

    /// Check whether a word (any casing) is stored
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    /// Append a new entry unless the word already exists
    ///
    /// # Errors
    ///
    /// - `WordExists`: an entry with the same word in any casing is
    ///   already stored. The store is left unchanged.
    pub fn insert(&self, word: &str, definition: &str) -> Result<Inserted> {
        let mut entries = self.write();

        let needle = word.to_lowercase();
        if entries.iter().any(|entry| entry.word.to_lowercase() == needle) {
            tracing::debug!(word = %word, "Rejected duplicate word");
            return Err(LexiconError::WordExists(word.to_string()));
        }

        let entry = Entry {
            word: word.to_string(),
            definition: definition.to_string(),
        };
        entries.push(entry.clone());
        let total_entries = entries.len();

        tracing::debug!(word = %word, total_entries, "Recorded new entry");

        Ok(Inserted {
            entry,
            total_entries,
        })
    }

    /// Current number of entries
    pub fn size(&self) -> usize {
        self.read().len()
    }

    /// Snapshot of all entries in insertion order
    pub fn entries(&self) -> Vec<Entry> {
        self.read().clone()
    }
}
