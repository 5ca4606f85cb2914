//! Flashcard practice session.
//!
//! A session starts empty. The first time its card is shown a random entry is
//! drawn; after that the card only changes on [`FlashcardSession::advance`].
//!
//! ```text
//! Empty --show/advance--> Front <--flip--> Back
//!                          ^                 |
//!                          +----advance------+
//! ```

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::error::SessionError;
use crate::types::{CardFace, SessionState};

/// Practice session state plus the random source used to draw cards.
#[derive(Debug, Clone)]
pub struct FlashcardSession<R = StdRng> {
    state: SessionState,
    rng: R,
}

impl FlashcardSession<StdRng> {
    /// Session with a deterministic random source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Session seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> FlashcardSession<R> {
    /// New empty session. No card is drawn until the first show or advance.
    pub fn new(rng: R) -> Self {
        Self {
            state: SessionState::new(),
            rng,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn face(&self) -> CardFace {
        self.state.face()
    }

    /// Draw a new card uniformly at random and show its front.
    ///
    /// On an empty catalog the state is left as it was.
    pub fn advance(&mut self, catalog: &Catalog) -> Result<&SessionState, SessionError> {
        let entry = catalog
            .entries()
            .choose(&mut self.rng)
            .ok_or(SessionError::EmptyCatalog)?;

        self.state = SessionState::front(entry.clone());
        Ok(&self.state)
    }

    /// Turn the card over. Does nothing when no card has been drawn.
    pub fn flip(&mut self) -> &SessionState {
        self.state.toggle();
        &self.state
    }

    /// State to render, drawing the first card if none has been drawn yet.
    pub fn show(&mut self, catalog: &Catalog) -> Result<&SessionState, SessionError> {
        if self.state.current.is_none() {
            return self.advance(catalog);
        }
        Ok(&self.state)
    }
}
