//! In-memory store of open practice sessions.
//!
//! Each session backs exactly one client view. Sessions are closed
//! explicitly or dropped once idle for longer than the configured limit.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;
use vocab_core::FlashcardSession;

/// A practice session plus bookkeeping.
#[derive(Debug)]
pub struct PracticeSession {
    pub session: FlashcardSession,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<Uuid, PracticeSession>,
    /// Source of per-session random generators.
    seeds: StdRng,
    idle_limit: Duration,
}

impl SessionStore {
    /// Create a store. With `seed` set, the n-th opened session always
    /// draws the same sequence of cards.
    pub fn new(seed: Option<u64>, idle_limit: Duration) -> Self {
        let seeds = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            sessions: HashMap::new(),
            seeds,
            idle_limit,
        }
    }

    /// Open a new, empty session and return its id.
    pub fn open(&mut self, now: DateTime<Utc>) -> Uuid {
        let pruned = self.prune_idle(now);
        if pruned > 0 {
            tracing::debug!(pruned, "dropped idle practice sessions");
        }

        let id = Uuid::new_v4();
        let session = FlashcardSession::new(StdRng::from_rng(&mut self.seeds));
        self.sessions.insert(
            id,
            PracticeSession {
                session,
                created_at: now,
                last_seen_at: now,
            },
        );
        id
    }

    /// Session by id, marking it as seen at `now`.
    pub fn get_mut(&mut self, id: Uuid, now: DateTime<Utc>) -> Option<&mut FlashcardSession> {
        let entry = self.sessions.get_mut(&id)?;
        entry.last_seen_at = now;
        Some(&mut entry.session)
    }

    pub fn get(&self, id: Uuid) -> Option<&PracticeSession> {
        self.sessions.get(&id)
    }

    /// Close a session. Returns false if it did not exist.
    pub fn close(&mut self, id: Uuid) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Drop sessions idle for longer than the limit. Returns how many were dropped.
    pub fn prune_idle(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        let limit = self.idle_limit;
        self.sessions
            .retain(|_, s| now.signed_duration_since(s.last_seen_at) <= limit);
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::{CardFace, Catalog, VocabEntry};

    fn catalog() -> Catalog {
        ["Solace", "Solemn", "Zen", "Sojourn"]
            .into_iter()
            .map(|w| VocabEntry::new(w, "definition", ""))
            .collect()
    }

    fn store() -> SessionStore {
        SessionStore::new(Some(7), Duration::minutes(30))
    }

    #[test]
    fn open_creates_empty_session() {
        let mut store = store();
        let now = Utc::now();
        let id = store.open(now);

        assert_eq!(store.len(), 1);
        let session = store.get_mut(id, now).unwrap();
        assert_eq!(session.face(), CardFace::Empty);
    }

    #[test]
    fn sessions_are_independent() {
        let catalog = catalog();
        let mut store = store();
        let now = Utc::now();
        let a = store.open(now);
        let b = store.open(now);

        store.get_mut(a, now).unwrap().advance(&catalog).unwrap();
        store.get_mut(a, now).unwrap().flip();

        assert_eq!(store.get_mut(a, now).unwrap().face(), CardFace::Back);
        assert_eq!(store.get_mut(b, now).unwrap().face(), CardFace::Empty);
    }

    #[test]
    fn close_removes_session() {
        let mut store = store();
        let id = store.open(Utc::now());
        assert!(store.close(id));
        assert!(!store.close(id));
        assert!(store.is_empty());
    }

    #[test]
    fn idle_sessions_are_pruned() {
        let mut store = store();
        let start = Utc::now();
        let stale = store.open(start);
        let active = store.open(start);

        let later = start + Duration::minutes(20);
        store.get_mut(active, later).unwrap();

        let much_later = start + Duration::minutes(45);
        assert_eq!(store.prune_idle(much_later), 1);
        assert!(store.get(stale).is_none());
        assert_eq!(store.get(active).unwrap().last_seen_at, later);
    }

    #[test]
    fn opening_prunes_idle_sessions() {
        let mut store = store();
        let start = Utc::now();
        let stale = store.open(start);

        store.open(start + Duration::hours(1));
        assert!(store.get(stale).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_seed_gives_same_draws() {
        let catalog = catalog();
        let now = Utc::now();
        let mut first = store();
        let mut second = store();
        let a = first.open(now);
        let b = second.open(now);

        for _ in 0..10 {
            let wa = first.get_mut(a, now).unwrap().advance(&catalog).unwrap().current.clone();
            let wb = second.get_mut(b, now).unwrap().advance(&catalog).unwrap().current.clone();
            assert_eq!(wa, wb);
        }
    }
}
