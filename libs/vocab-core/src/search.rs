//! Free-text filtering of the catalog.
//!
//! An empty query lists every entry sorted by word. A non-empty query keeps
//! entries whose word contains it, ignoring case, in catalog order.

use crate::catalog::Catalog;
use crate::types::VocabEntry;

/// Entries of `catalog` to display for `query`.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a VocabEntry> {
    apply(catalog.iter(), query)
}

/// Same rule as [`filter`], applied to an existing result.
pub fn filter_entries<'a>(entries: &[&'a VocabEntry], query: &str) -> Vec<&'a VocabEntry> {
    apply(entries.iter().copied(), query)
}

fn apply<'a, I>(entries: I, query: &str) -> Vec<&'a VocabEntry>
where
    I: Iterator<Item = &'a VocabEntry>,
{
    // blank decides sorting only; matching uses the query as typed
    if query.trim().is_empty() {
        let mut all: Vec<_> = entries.collect();
        // stable: equal words keep catalog order
        all.sort_by(|a, b| a.word().cmp(b.word()));
        return all;
    }

    let needle = query.to_lowercase();
    entries
        .filter(|e| e.word().to_lowercase().contains(&needle))
        .collect()
}
