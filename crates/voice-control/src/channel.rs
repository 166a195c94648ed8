//! Command channel implementation

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use session::{AlertGate, MessageBoard};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{
    classify_command, CaptureError, CommandIntent, SpeechCapture, SpeechToText, TranscribeError,
};

/// Channel settings
#[derive(Debug, Clone)]
pub struct VoiceChannelConfig {
    /// Maximum wait for a spoken phrase
    pub listen_timeout: Duration,

    /// On-screen lifetime of outcome messages, in rendered frames
    pub message_frames: u32,
}

impl Default for VoiceChannelConfig {
    fn default() -> Self {
        Self {
            listen_timeout: Duration::from_secs(5),
            message_frames: 150,
        }
    }
}

/// Operator voice command channel.
///
/// Triggered by an operator action, never polled per frame. The microphone
/// is behind a mutex so overlapping triggers serialize instead of fighting
/// over the device.
pub struct VoiceCommandChannel<C, R> {
    capture: Arc<Mutex<C>>,
    recognizer: Arc<R>,
    gate: AlertGate,
    messages: MessageBoard,
    config: VoiceChannelConfig,
}

impl<C, R> Clone for VoiceCommandChannel<C, R> {
    fn clone(&self) -> Self {
        Self {
            capture: Arc::clone(&self.capture),
            recognizer: Arc::clone(&self.recognizer),
            gate: self.gate.clone(),
            messages: self.messages.clone(),
            config: self.config.clone(),
        }
    }
}

impl<C, R> VoiceCommandChannel<C, R>
where
    C: SpeechCapture,
    R: SpeechToText,
{
    pub fn new(
        capture: C,
        recognizer: R,
        gate: AlertGate,
        messages: MessageBoard,
        config: VoiceChannelConfig,
    ) -> Self {
        Self {
            capture: Arc::new(Mutex::new(capture)),
            recognizer: Arc::new(recognizer),
            gate,
            messages,
            config,
        }
    }

    /// Run one capture/recognize/apply sequence on a blocking worker so the
    /// frame loop keeps rendering while the operator speaks.
    pub fn spawn(&self) -> JoinHandle<()> {
        let channel = self.clone();
        tokio::task::spawn_blocking(move || channel.run_blocking())
    }

    /// The blocking command sequence. Every path ends with a transient
    /// message; only enable/disable intents touch the alert gate.
    pub fn run_blocking(&self) {
        self.messages.post("Listening...", self.config.message_frames);

        let clip = match self.capture_guard().listen(self.config.listen_timeout) {
            Ok(clip) => clip,
            Err(CaptureError::Timeout) => {
                self.messages
                    .post("Listening timed out.", self.config.message_frames);
                return;
            }
            Err(e) => {
                warn!("voice capture failed: {}", e);
                self.messages
                    .post("Microphone unavailable.", self.config.message_frames);
                return;
            }
        };

        self.messages
            .post("Recognizing...", self.config.message_frames);

        let transcript = match self.recognizer.transcribe(&clip) {
            Ok(text) => text.to_lowercase(),
            Err(TranscribeError::NotUnderstood) => {
                self.messages
                    .post("Could not understand audio.", self.config.message_frames);
                return;
            }
            Err(TranscribeError::ServiceUnavailable(e)) => {
                warn!("speech service unavailable: {}", e);
                self.messages
                    .post("Speech service unavailable.", self.config.message_frames);
                return;
            }
        };
        info!("voice command transcribed: {}", transcript);

        match classify_command(&transcript) {
            CommandIntent::EnableAlerts => {
                self.gate.set_enabled(true);
                self.messages.post(
                    format!("You said: {}", transcript),
                    self.config.message_frames,
                );
            }
            CommandIntent::DisableAlerts => {
                self.gate.set_enabled(false);
                self.messages.post(
                    format!("You said: {}", transcript),
                    self.config.message_frames,
                );
            }
            CommandIntent::UnderDevelopment => {
                self.messages
                    .post("Feature under development.", self.config.message_frames);
            }
            CommandIntent::Unrecognized => {
                self.messages.post(
                    format!("You said: {}", transcript),
                    self.config.message_frames,
                );
            }
        }
    }

    fn capture_guard(&self) -> MutexGuard<'_, C> {
        self.capture.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AudioClip;

    fn clip() -> AudioClip {
        AudioClip {
            samples: vec![0; 16_000],
            sample_rate: 16_000,
        }
    }

    /// One-shot microphone with a canned outcome.
    struct CannedCapture {
        outcome: Option<Result<AudioClip, CaptureError>>,
    }

    impl SpeechCapture for CannedCapture {
        fn listen(&mut self, _timeout: Duration) -> Result<AudioClip, CaptureError> {
            self.outcome.take().expect("listen called twice")
        }
    }

    enum CannedResult {
        Text(&'static str),
        NotUnderstood,
        Unavailable,
    }

    struct CannedRecognizer {
        result: CannedResult,
    }

    impl SpeechToText for CannedRecognizer {
        fn transcribe(&self, _clip: &AudioClip) -> Result<String, TranscribeError> {
            match &self.result {
                CannedResult::Text(text) => Ok((*text).to_string()),
                CannedResult::NotUnderstood => Err(TranscribeError::NotUnderstood),
                CannedResult::Unavailable => Err(TranscribeError::ServiceUnavailable(
                    "connection refused".to_string(),
                )),
            }
        }
    }

    fn channel(
        capture_outcome: Result<AudioClip, CaptureError>,
        result: CannedResult,
        gate: AlertGate,
        messages: MessageBoard,
    ) -> VoiceCommandChannel<CannedCapture, CannedRecognizer> {
        VoiceCommandChannel::new(
            CannedCapture {
                outcome: Some(capture_outcome),
            },
            CannedRecognizer { result },
            gate,
            messages,
            VoiceChannelConfig::default(),
        )
    }

    #[test]
    fn test_enable_command_opens_the_gate() {
        let gate = AlertGate::new(false);
        let messages = MessageBoard::new();
        channel(
            Ok(clip()),
            CannedResult::Text("please Enable the alert please"),
            gate.clone(),
            messages.clone(),
        )
        .run_blocking();

        assert!(gate.is_enabled());
        assert_eq!(
            messages.peek().unwrap().text,
            "You said: please enable the alert please"
        );
    }

    #[test]
    fn test_disable_command_closes_the_gate() {
        let gate = AlertGate::default();
        let messages = MessageBoard::new();
        channel(
            Ok(clip()),
            CannedResult::Text("disable now"),
            gate.clone(),
            messages.clone(),
        )
        .run_blocking();

        assert!(!gate.is_enabled());
    }

    #[test]
    fn test_radio_request_leaves_gate_untouched() {
        let gate = AlertGate::default();
        let messages = MessageBoard::new();
        channel(
            Ok(clip()),
            CannedResult::Text("turn on the radio"),
            gate.clone(),
            messages.clone(),
        )
        .run_blocking();

        assert!(gate.is_enabled());
        assert_eq!(messages.peek().unwrap().text, "Feature under development.");
    }

    #[test]
    fn test_unrecognized_transcript_is_echoed() {
        let gate = AlertGate::default();
        let messages = MessageBoard::new();
        channel(
            Ok(clip()),
            CannedResult::Text("what a nice morning"),
            gate.clone(),
            messages.clone(),
        )
        .run_blocking();

        assert!(gate.is_enabled());
        assert_eq!(messages.peek().unwrap().text, "You said: what a nice morning");
    }

    #[test]
    fn test_listen_timeout_posts_notice_without_state_change() {
        let gate = AlertGate::default();
        let messages = MessageBoard::new();
        channel(
            Err(CaptureError::Timeout),
            CannedResult::Text("never reached"),
            gate.clone(),
            messages.clone(),
        )
        .run_blocking();

        assert!(gate.is_enabled());
        assert_eq!(messages.peek().unwrap().text, "Listening timed out.");
    }

    #[test]
    fn test_not_understood_posts_notice_without_state_change() {
        let gate = AlertGate::default();
        let messages = MessageBoard::new();
        channel(
            Ok(clip()),
            CannedResult::NotUnderstood,
            gate.clone(),
            messages.clone(),
        )
        .run_blocking();

        assert!(gate.is_enabled());
        assert_eq!(messages.peek().unwrap().text, "Could not understand audio.");
    }

    #[test]
    fn test_service_unavailable_posts_notice_without_state_change() {
        let gate = AlertGate::default();
        let messages = MessageBoard::new();
        channel(
            Ok(clip()),
            CannedResult::Unavailable,
            gate.clone(),
            messages.clone(),
        )
        .run_blocking();

        assert!(gate.is_enabled());
        assert_eq!(messages.peek().unwrap().text, "Speech service unavailable.");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_spawned_sequence_runs_off_the_caller() {
        let gate = AlertGate::default();
        let messages = MessageBoard::new();
        let ch = channel(
            Ok(clip()),
            CannedResult::Text("disable the alerts"),
            gate.clone(),
            messages.clone(),
        );

        ch.spawn().await.expect("worker panicked");
        assert!(!gate.is_enabled());
    }
}
