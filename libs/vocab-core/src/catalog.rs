//! The fixed vocabulary catalog.

use std::sync::{Arc, OnceLock};

use uuid::Uuid;

use crate::error::Result;
use crate::parser;
use crate::types::VocabEntry;

/// Word list compiled into the binary.
pub const BUILTIN_WORD_LIST: &str = include_str!("../data/words.txt");

static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();

/// Ordered, read-only collection of vocabulary entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<VocabEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<VocabEntry>) -> Self {
        Self { entries }
    }

    /// The built-in catalog.
    ///
    /// Parsed on first use; every call returns the same instance so entry ids
    /// stay stable for the life of the process.
    pub fn load() -> Arc<Catalog> {
        BUILTIN
            .get_or_init(|| {
                let entries = parser::parse(BUILTIN_WORD_LIST)
                    .expect("built-in word list is well-formed");
                tracing::debug!(count = entries.len(), "loaded built-in catalog");
                Arc::new(Catalog::new(entries))
            })
            .clone()
    }

    /// Build a catalog from word-list text.
    pub fn from_word_list(content: &str) -> Result<Self> {
        parser::parse(content).map(Self::new)
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VocabEntry> {
        self.entries.iter()
    }

    /// Look up an entry by id.
    pub fn get(&self, id: Uuid) -> Option<&VocabEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }
}

impl FromIterator<VocabEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = VocabEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a VocabEntry;
    type IntoIter = std::slice::Iter<'a, VocabEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
