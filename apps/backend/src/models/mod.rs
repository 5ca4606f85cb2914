//! API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from vocab-core
pub use vocab_core::types::{CardFace, SessionState, VocabEntry};

// === Dictionary ===

/// Query string for GET /api/words
#[derive(Debug, Default, Deserialize)]
pub struct WordsQuery {
    #[serde(default)]
    pub q: String,
}

/// One row of the dictionary list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordListItem {
    pub id: Uuid,
    pub word: String,
    pub summary: String,
}

impl From<&VocabEntry> for WordListItem {
    fn from(entry: &VocabEntry) -> Self {
        Self {
            id: entry.id(),
            word: entry.word().to_string(),
            summary: entry.summary().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordListResponse {
    /// Size of the whole catalog.
    pub total: usize,
    /// Number of rows returned.
    pub count: usize,
    pub words: Vec<WordListItem>,
}

/// Full entry, as shown on the detail screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordDetail {
    pub id: Uuid,
    pub word: String,
    pub definition: String,
    pub mnemonic: String,
}

impl From<&VocabEntry> for WordDetail {
    fn from(entry: &VocabEntry) -> Self {
        Self {
            id: entry.id(),
            word: entry.word().to_string(),
            definition: entry.definition().to_string(),
            mnemonic: entry.mnemonic().to_string(),
        }
    }
}

// === Speech ===

#[derive(Debug, Serialize, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
}

// === Practice ===

/// What the practice card shows.
///
/// The front carries only the word; the back adds definition and mnemonic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardView {
    /// Session id
    pub id: Uuid,
    pub face: CardFace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
}

impl CardView {
    pub fn new(session_id: Uuid, state: &SessionState) -> Self {
        let face = state.face();
        let entry = state.current.as_ref();
        let back = face == CardFace::Back;

        Self {
            id: session_id,
            face,
            entry_id: entry.map(|e| e.id()),
            word: entry.map(|e| e.word().to_string()),
            definition: entry.filter(|_| back).map(|e| e.definition().to_string()),
            mnemonic: entry.filter(|_| back).map(|e| e.mnemonic().to_string()),
        }
    }
}
