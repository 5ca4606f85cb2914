//! Speech engine backed by an external synthesizer process.
//!
//! Defaults to `espeak-ng`. Each utterance is one child process; stopping an
//! utterance kills it.

use std::io::ErrorKind;
use std::process::{Child, Command, Stdio};

use super::{SpeechEngine, Utterance};
use crate::error::SpeechError;

/// espeak-ng's normal speaking rate in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 175;

const MIN_WORDS_PER_MINUTE: f32 = 80.0;

#[derive(Debug)]
pub struct CommandEngine {
    program: String,
    words_per_minute: u32,
    voices: Option<Vec<String>>,
    child: Option<Child>,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            voices: None,
            child: None,
        }
    }

    pub fn espeak() -> Self {
        Self::new("espeak-ng")
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Speaking rate that corresponds to a relative rate of 1.0.
    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    /// Use a fixed voice list instead of asking the program.
    pub fn with_voices(mut self, voices: Vec<String>) -> Self {
        self.voices = Some(voices.into_iter().map(|v| v.to_lowercase()).collect());
        self
    }

    fn speed(&self, rate: f32) -> u32 {
        (self.words_per_minute as f32 * rate)
            .round()
            .max(MIN_WORDS_PER_MINUTE) as u32
    }

    /// Command line that plays `utterance`.
    pub fn command(&self, utterance: &Utterance) -> Command {
        let mut command = Command::new(&self.program);
        if let Some(voice) = &utterance.voice {
            command.arg("-v").arg(voice.to_lowercase());
        }
        command
            .arg("-s")
            .arg(self.speed(utterance.rate).to_string())
            // end of options: the text may start with '-'
            .arg("--")
            .arg(&utterance.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }

    fn voices(&mut self) -> &[String] {
        if self.voices.is_none() {
            let voices = match Command::new(&self.program).arg("--voices").output() {
                Ok(output) if output.status.success() => {
                    parse_voice_list(&String::from_utf8_lossy(&output.stdout))
                }
                Ok(output) => {
                    tracing::debug!(program = %self.program, status = %output.status, "voice listing failed");
                    Vec::new()
                }
                Err(err) => {
                    tracing::debug!(program = %self.program, error = %err, "voice listing failed");
                    Vec::new()
                }
            };
            self.voices = Some(voices);
        }
        self.voices.as_deref().unwrap_or_default()
    }
}

impl SpeechEngine for CommandEngine {
    fn is_speaking(&mut self) -> bool {
        let Some(child) = self.child.as_mut() else {
            return false;
        };

        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(_)) | Err(_) => {
                self.child = None;
                false
            }
        }
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(err) = child.kill() {
                tracing::debug!(error = %err, "failed to kill speech process");
            }
            // reap so no zombie is left behind
            let _ = child.wait();
        }
    }

    fn supports_voice(&mut self, voice: &str) -> bool {
        let voice = voice.to_lowercase();
        self.voices().iter().any(|v| *v == voice)
    }

    fn start(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        self.stop();

        let child = self.command(utterance).spawn().map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                SpeechError::Unavailable
            } else {
                SpeechError::Io(err)
            }
        })?;

        self.child = Some(child);
        Ok(())
    }
}

impl Drop for CommandEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Language tags from `espeak-ng --voices` output, lowercased.
pub fn parse_voice_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim_start().starts_with("Pty"))
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(|lang| lang.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(command: &Command) -> Vec<String> {
        command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn command_passes_voice_speed_and_text() {
        let engine = CommandEngine::espeak().with_words_per_minute(200);
        let utterance = Utterance {
            text: "Sojourn".to_string(),
            voice: Some("en-IN".to_string()),
            rate: 0.8,
        };

        let command = engine.command(&utterance);
        assert_eq!(command.get_program(), "espeak-ng");
        assert_eq!(args(&command), vec!["-v", "en-in", "-s", "160", "--", "Sojourn"]);
    }

    #[test]
    fn default_voice_omits_voice_flag() {
        let engine = CommandEngine::espeak();
        let utterance = Utterance {
            text: "Zen".to_string(),
            voice: None,
            rate: 1.0,
        };
        assert_eq!(args(&engine.command(&utterance)), vec!["-s", "175", "--", "Zen"]);
    }

    #[test]
    fn text_starting_with_dash_is_not_an_option() {
        let engine = CommandEngine::espeak();
        let utterance = Utterance {
            text: "-w/tmp/x".to_string(),
            voice: None,
            rate: 1.0,
        };

        let args = args(&engine.command(&utterance));
        assert_eq!(args, vec!["-s", "175", "--", "-w/tmp/x"]);
        let separator = args.iter().position(|a| a == "--").unwrap();
        assert_eq!(args.iter().position(|a| a == "-w/tmp/x"), Some(separator + 1));
    }

    #[test]
    fn speed_has_a_floor() {
        let engine = CommandEngine::espeak();
        assert_eq!(engine.speed(0.1), 80);
    }

    #[test]
    fn parses_voice_listing() {
        let output = "Pty Language       Age/Gender VoiceName          File                 Other Languages\n \
                      5  af              --/M      Afrikaans          gmw/af\n \
                      5  en-in           --/M      English_(India)    gmw/en-IN\n";
        assert_eq!(parse_voice_list(output), vec!["af", "en-in"]);
    }

    #[test]
    fn voice_lookup_ignores_case() {
        let mut engine = CommandEngine::espeak().with_voices(vec!["en-in".to_string()]);
        assert!(engine.supports_voice("en-IN"));
        assert!(!engine.supports_voice("en-GB"));
    }

    #[test]
    fn missing_program_is_unavailable() {
        let mut engine = CommandEngine::new("vocab-core-no-such-synthesizer");
        let utterance = Utterance {
            text: "Zen".to_string(),
            voice: None,
            rate: 1.0,
        };

        assert!(matches!(engine.start(&utterance), Err(SpeechError::Unavailable)));
        assert!(!engine.is_speaking());
        assert!(!engine.supports_voice("en-IN"));
    }
}
