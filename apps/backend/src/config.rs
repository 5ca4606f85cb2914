//! Server configuration from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use chrono::Duration;
use vocab_core::SpeechConfig;

/// Value of `VOCAB_TTS_PROGRAM` that turns speech off.
const SPEECH_DISABLED: &str = "none";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Custom word list replacing the built-in catalog.
    pub words_file: Option<PathBuf>,
    pub speech: SpeechSettings,
    /// Seed for practice draws; random when unset.
    pub practice_seed: Option<u64>,
    pub session_idle: Duration,
}

#[derive(Debug, Clone)]
pub struct SpeechSettings {
    /// Synthesizer program, `None` when speech is disabled.
    pub program: Option<String>,
    pub voice: SpeechConfig,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SpeechConfig::default();

        let program = lookup("VOCAB_TTS_PROGRAM").unwrap_or_else(|| "espeak-ng".to_string());
        let program = if program.trim().eq_ignore_ascii_case(SPEECH_DISABLED) || program.trim().is_empty() {
            None
        } else {
            Some(program)
        };

        let rate: f32 = parse_var(&lookup, "VOCAB_TTS_RATE")?.unwrap_or(defaults.rate);
        if !(rate > 0.0 && rate <= 4.0) {
            anyhow::bail!("VOCAB_TTS_RATE must be in (0, 4], got {rate}");
        }

        let idle_minutes: i64 = parse_var(&lookup, "VOCAB_SESSION_IDLE_MINUTES")?.unwrap_or(120);
        if idle_minutes <= 0 {
            anyhow::bail!("VOCAB_SESSION_IDLE_MINUTES must be positive, got {idle_minutes}");
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&lookup, "PORT")?.unwrap_or(3000),
            words_file: lookup("VOCAB_WORDS_FILE").map(PathBuf::from),
            speech: SpeechSettings {
                program,
                voice: SpeechConfig {
                    voice: lookup("VOCAB_TTS_VOICE").unwrap_or(defaults.voice),
                    rate,
                },
            },
            practice_seed: parse_var(&lookup, "VOCAB_PRACTICE_SEED")?,
            session_idle: Duration::minutes(idle_minutes),
        })
    }

    /// Socket address to listen on.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {key}: {value:?}"))
        })
        .transpose()
}
