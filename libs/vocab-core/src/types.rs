//! Core types for the vocabulary catalog and practice sessions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One vocabulary record.
///
/// Entries are immutable once built; every construction assigns a fresh id,
/// so two entries with the same word are still distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VocabEntry {
    id: Uuid,
    word: String,
    definition: String,
    mnemonic: String,
}

impl VocabEntry {
    /// Create a new entry with a generated id.
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
        mnemonic: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            word: word.into(),
            definition: definition.into(),
            mnemonic: mnemonic.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Memory trick for the word. May be empty.
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// First line of the definition, as shown in list rows.
    pub fn summary(&self) -> &str {
        self.definition.lines().next().unwrap_or_default()
    }
}

/// Which side of the practice card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFace {
    /// No card drawn yet.
    Empty,
    /// Word side.
    Front,
    /// Definition and mnemonic side.
    Back,
}

/// State backing one flashcard practice view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub current: Option<VocabEntry>,
    pub flipped: bool,
}

impl SessionState {
    /// Fresh state: no card, not flipped.
    pub fn new() -> Self {
        Self::default()
    }

    /// State showing the front of `entry`.
    pub fn front(entry: VocabEntry) -> Self {
        Self {
            current: Some(entry),
            flipped: false,
        }
    }

    /// Return the state with `flipped` toggled.
    /// Without a current card the state is returned unchanged.
    pub fn toggled(mut self) -> Self {
        self.toggle();
        self
    }

    pub(crate) fn toggle(&mut self) {
        if self.current.is_some() {
            self.flipped = !self.flipped;
        }
    }

    pub fn face(&self) -> CardFace {
        match (&self.current, self.flipped) {
            (None, _) => CardFace::Empty,
            (Some(_), false) => CardFace::Front,
            (Some(_), true) => CardFace::Back,
        }
    }
}
