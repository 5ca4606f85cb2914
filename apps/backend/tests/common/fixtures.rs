//! Test fixtures and factory functions for creating test data.

use std::sync::Arc;

use vocab_core::{Catalog, VocabEntry};

/// Catalog of the three words used throughout the examples.
pub fn sample_catalog() -> Arc<Catalog> {
    Arc::new(
        [
            ("Solace", "Comfort in sorrow.", "Soul + Lace (comforting tie)."),
            ("Solemn", "Formal and dignified.", "Soul-emn (serious soul)."),
            ("Zen", "A state of calm attentiveness.", ""),
        ]
        .into_iter()
        .map(|(word, definition, mnemonic)| VocabEntry::new(word, definition, mnemonic))
        .collect(),
    )
}

/// Catalog with a single entry.
pub fn single_word_catalog(word: &str) -> Arc<Catalog> {
    Arc::new(Catalog::new(vec![VocabEntry::new(
        word,
        format!("Definition of {word}."),
        format!("Trick for {word}."),
    )]))
}

pub fn empty_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::default())
}

/// Generate word-list content with a specified number of entries.
pub fn sample_word_list(num_entries: usize) -> String {
    (0..num_entries)
        .map(|i| format!("W: Word{}\nD: Definition {}.\nM: Trick {}.\n", i + 1, i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
