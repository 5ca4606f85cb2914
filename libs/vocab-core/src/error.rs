//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a word list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{field} line without a preceding word at line {line}")]
    MissingWord { field: &'static str, line: usize },

    #[error("text outside any entry at line {line}")]
    OrphanText { line: usize },

    #[error("empty word at line {line}")]
    EmptyWord { line: usize },

    #[error("missing definition for entry starting at line {line}")]
    MissingDefinition { line: usize },

    #[error("duplicate {field} at line {line}")]
    DuplicateField { field: &'static str, line: usize },
}

/// Errors raised by a flashcard session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot draw a card from an empty catalog")]
    EmptyCatalog,
}

/// Errors reported by a speech engine.
///
/// These never escape [`crate::speech::Speaker`]; they exist so engines can
/// tell the speaker why an utterance did not start.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech synthesis is not available")]
    Unavailable,

    #[error("voice not available: {0}")]
    VoiceUnavailable(String),

    #[error("speech engine i/o error: {0}")]
    Io(#[from] std::io::Error),
}
