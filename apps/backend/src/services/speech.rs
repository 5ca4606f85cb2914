//! Construction of the speech service from configuration.

use std::sync::Arc;

use vocab_core::{CommandEngine, SilentEngine, Speaker, Speech};

use crate::config::SpeechSettings;

/// Build the speech service described by `settings`.
pub fn build(settings: &SpeechSettings) -> Arc<dyn Speech> {
    match &settings.program {
        Some(program) => {
            tracing::info!(
                program = %program,
                voice = %settings.voice.voice,
                rate = settings.voice.rate,
                "speech enabled"
            );
            Arc::new(Speaker::new(CommandEngine::new(program.clone()), settings.voice.clone()))
        }
        None => {
            tracing::info!("speech disabled");
            Arc::new(Speaker::new(SilentEngine, settings.voice.clone()))
        }
    }
}

/// Speak `text` on a blocking thread and wait until playback has started.
pub async fn speak(speech: Arc<dyn Speech>, text: String) -> Result<(), tokio::task::JoinError> {
    tokio::task::spawn_blocking(move || speech.speak(&text)).await
}
