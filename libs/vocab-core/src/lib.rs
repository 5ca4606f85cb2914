//! Core vocabulary library shared by the study applications.
//!
//! Provides:
//! - The built-in word catalog and its word-list parser
//! - Search filtering for the dictionary list
//! - Flashcard practice sessions with an injectable random source
//! - The text-to-speech service boundary and engines

pub mod catalog;
pub mod error;
pub mod parser;
pub mod search;
pub mod session;
pub mod speech;
pub mod types;

pub use catalog::Catalog;
pub use error::{ParseError, Result, SessionError, SpeechError};
pub use parser::parse;
pub use search::{filter, filter_entries};
pub use session::FlashcardSession;
pub use speech::{CommandEngine, SilentEngine, Speaker, Speech, SpeechConfig, SpeechEngine, Utterance};
pub use types::{CardFace, SessionState, VocabEntry};
