//! Voice Command Channel
//!
//! On-demand operator channel: capture a short spoken phrase, transcribe
//! it, and apply the recognized intent. The blocking capture/recognize
//! sequence runs on a worker so the frame loop never stalls; every outcome
//! ends with a transient on-screen message. The channel mutates nothing
//! but the alert gate and the message board.

mod channel;
mod intent;

pub use channel::{VoiceChannelConfig, VoiceCommandChannel};
pub use intent::{classify_command, CommandIntent};

use std::time::Duration;
use thiserror::Error;

/// Captured audio clip: mono i16 samples
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

/// Capture failure outcomes
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("listening timed out")]
    Timeout,

    #[error("microphone error: {0}")]
    Device(String),
}

/// Recognition failure outcomes
#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("could not understand audio")]
    NotUnderstood,

    #[error("speech service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Microphone boundary.
///
/// `listen` blocks until a phrase is captured or the deadline passes.
pub trait SpeechCapture: Send + 'static {
    fn listen(&mut self, timeout: Duration) -> Result<AudioClip, CaptureError>;
}

/// Speech-to-text boundary.
pub trait SpeechToText: Send + Sync + 'static {
    fn transcribe(&self, clip: &AudioClip) -> Result<String, TranscribeError>;
}
