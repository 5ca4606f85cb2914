//! Text-to-speech service boundary.
//!
//! [`Speech`] is the interface the rest of the application sees: one
//! fire-and-forget `speak` call. [`Speaker`] implements it on top of a
//! platform [`SpeechEngine`], keeping at most one utterance active and
//! falling back to the engine's default voice when the configured one is
//! missing. Failures are logged and never returned.

pub mod command;

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::SpeechError;

pub use command::CommandEngine;

/// Pronounces text. Implementations must not surface errors to callers.
pub trait Speech: Send + Sync {
    fn speak(&self, text: &str);
}

/// Voice settings applied to every utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// BCP 47 language tag of the preferred voice.
    pub voice: String,
    /// Speaking rate relative to the engine's normal rate (1.0).
    pub rate: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            voice: "en-IN".to_string(),
            rate: 0.9,
        }
    }
}

/// One request to synthesize speech.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// `None` means the engine's default voice.
    pub voice: Option<String>,
    pub rate: f32,
}

/// Platform speech synthesizer.
pub trait SpeechEngine: Send {
    /// Whether an utterance is still playing.
    fn is_speaking(&mut self) -> bool;

    /// Stop the current utterance immediately.
    fn stop(&mut self);

    fn supports_voice(&mut self, voice: &str) -> bool;

    /// Start playing `utterance`. Returns once playback has started.
    fn start(&mut self, utterance: &Utterance) -> Result<(), SpeechError>;
}

/// [`Speech`] implementation that drives a [`SpeechEngine`].
pub struct Speaker<E> {
    engine: Mutex<E>,
    config: SpeechConfig,
}

impl<E: SpeechEngine> Speaker<E> {
    pub fn new(engine: E, config: SpeechConfig) -> Self {
        Self {
            engine: Mutex::new(engine),
            config,
        }
    }

    pub fn config(&self) -> &SpeechConfig {
        &self.config
    }

    fn utterance(&self, engine: &mut E, text: &str) -> Utterance {
        let voice = if engine.supports_voice(&self.config.voice) {
            Some(self.config.voice.clone())
        } else {
            tracing::debug!(voice = %self.config.voice, "voice unavailable, using default voice");
            None
        };

        Utterance {
            text: text.to_string(),
            voice,
            rate: self.config.rate,
        }
    }
}

impl<E: SpeechEngine> Speech for Speaker<E> {
    fn speak(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let mut engine = match self.engine.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if engine.is_speaking() {
            engine.stop();
        }

        let mut utterance = self.utterance(&mut engine, text);
        let result = match engine.start(&utterance) {
            Err(SpeechError::VoiceUnavailable(voice)) if utterance.voice.is_some() => {
                tracing::debug!(%voice, "engine rejected voice, retrying with default voice");
                utterance.voice = None;
                engine.start(&utterance)
            }
            other => other,
        };

        match result {
            Ok(()) => tracing::debug!(text, "speaking"),
            Err(err) => tracing::warn!(error = %err, "speech synthesis failed"),
        }
    }
}

/// Engine that accepts every utterance and plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentEngine;

impl SpeechEngine for SilentEngine {
    fn is_speaking(&mut self) -> bool {
        false
    }

    fn stop(&mut self) {}

    fn supports_voice(&mut self, _voice: &str) -> bool {
        true
    }

    fn start(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        tracing::trace!(text = %utterance.text, "speech disabled, dropping utterance");
        Ok(())
    }
}
