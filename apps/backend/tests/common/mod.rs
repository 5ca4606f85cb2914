//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the real router to a catalog and seeded sessions
//! - RecordingSpeech, a speech service that records instead of playing

#![allow(dead_code)]

pub mod fixtures;

use std::sync::{Arc, Mutex};

use axum::Router;
use chrono::Duration;
use vocab_core::{Catalog, Speech};

use vocab_master_backend::services::sessions::SessionStore;
use vocab_master_backend::{app, AppState};

/// Seed used for practice draws in tests.
pub const TEST_SEED: u64 = 42;

/// Speech service that records utterances.
///
/// Like a real synthesizer, a new utterance stops the one in progress.
#[derive(Debug, Default)]
pub struct RecordingSpeech {
    inner: Mutex<Recording>,
}

#[derive(Debug, Default)]
struct Recording {
    spoken: Vec<String>,
    interrupted: Vec<String>,
    active: Option<String>,
}

impl RecordingSpeech {
    /// Every text passed to `speak`, in order.
    pub fn spoken(&self) -> Vec<String> {
        self.inner.lock().unwrap().spoken.clone()
    }

    /// Utterances stopped by a later one.
    pub fn interrupted(&self) -> Vec<String> {
        self.inner.lock().unwrap().interrupted.clone()
    }

    /// Utterance currently playing.
    pub fn active(&self) -> Option<String> {
        self.inner.lock().unwrap().active.clone()
    }
}

impl Speech for RecordingSpeech {
    fn speak(&self, text: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(previous) = inner.active.take() {
            inner.interrupted.push(previous);
        }
        inner.spoken.push(text.to_string());
        inner.active = Some(text.to_string());
    }
}

/// Test context containing the shared state and the router under test.
pub struct TestContext {
    pub catalog: Arc<Catalog>,
    pub speech: Arc<RecordingSpeech>,
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Context over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::load())
    }

    /// Context over a specific catalog.
    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        let speech = Arc::new(RecordingSpeech::default());
        let sessions = SessionStore::new(Some(TEST_SEED), Duration::minutes(30));
        let state = AppState::new(catalog.clone(), sessions, speech.clone());
        let app = app(state.clone());

        Self {
            catalog,
            speech,
            state,
            app,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
