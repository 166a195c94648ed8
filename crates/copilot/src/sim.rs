//! Simulated collaborators
//!
//! Stand-ins for the external detector, audio, and speech services, used by
//! the demo binary and the integration tests. The scripted landmark source
//! synthesizes eye geometry that evaluates to an exact target openness, so
//! scenarios can be driven in openness terms.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use alarm::{AlarmSound, PlaybackError};
use eye_metrics::{EyeLandmarks, FaceLandmarks, FrameSize, LandmarkPoint, LandmarkSource};
use tracing::warn;
use voice_control::{AudioClip, CaptureError, SpeechCapture, SpeechToText, TranscribeError};

/// One eye centered at (cx, cy) whose EAR evaluates to `openness`.
fn synthetic_eye(cx: f32, cy: f32, width: f32, openness: f32, frame: FrameSize) -> EyeLandmarks {
    let half_w = width / 2.0;
    // Lid pairs share an x coordinate, so their pixel distance is purely
    // vertical: v_px = openness * h_px.
    let h_px = width * frame.width as f32;
    let v_norm = openness * h_px / frame.height as f32;
    let top = cy - v_norm / 2.0;
    let bottom = cy + v_norm / 2.0;
    EyeLandmarks::new([
        LandmarkPoint::new(cx - half_w, cy),
        LandmarkPoint::new(cx - half_w * 0.4, top),
        LandmarkPoint::new(cx + half_w * 0.4, top),
        LandmarkPoint::new(cx + half_w, cy),
        LandmarkPoint::new(cx + half_w * 0.4, bottom),
        LandmarkPoint::new(cx - half_w * 0.4, bottom),
    ])
}

/// A face whose averaged openness evaluates to `openness` for `frame`.
pub fn synthetic_face(openness: f32, frame: FrameSize) -> FaceLandmarks {
    FaceLandmarks {
        left_eye: synthetic_eye(0.35, 0.42, 0.10, openness, frame),
        right_eye: synthetic_eye(0.65, 0.42, 0.10, openness, frame),
    }
}

/// Landmark source replaying a scripted per-frame openness sequence.
///
/// `None` entries are no-face frames. Past the end of the script the source
/// keeps reporting no face.
pub struct ScriptedLandmarkSource {
    script: Vec<Option<f32>>,
    cursor: usize,
}

impl ScriptedLandmarkSource {
    pub fn new(script: Vec<Option<f32>>) -> Self {
        Self { script, cursor: 0 }
    }

    pub fn finished(&self) -> bool {
        self.cursor >= self.script.len()
    }
}

impl LandmarkSource for ScriptedLandmarkSource {
    type Frame = FrameSize;

    fn detect(&mut self, frame: &FrameSize) -> Option<FaceLandmarks> {
        let entry = self.script.get(self.cursor).copied().flatten();
        self.cursor += 1;
        entry.map(|openness| synthetic_face(openness, *frame))
    }
}

/// Alarm sound that logs instead of playing, with a short simulated
/// playback duration.
pub struct ConsoleAlarm;

impl AlarmSound for ConsoleAlarm {
    fn play(&self, path: &str) -> Result<(), PlaybackError> {
        warn!("ALARM - drowsiness detected (would play {})", path);
        std::thread::sleep(Duration::from_millis(500));
        Ok(())
    }
}

/// Test player that counts completed playbacks without sleeping.
#[derive(Default)]
pub struct CountingPlayer {
    pub plays: AtomicUsize,
}

impl AlarmSound for CountingPlayer {
    fn play(&self, _path: &str) -> Result<(), PlaybackError> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Microphone stand-in yielding a fixed-length silent clip.
pub struct CannedCapture;

impl SpeechCapture for CannedCapture {
    fn listen(&mut self, _timeout: Duration) -> Result<AudioClip, CaptureError> {
        Ok(AudioClip {
            samples: vec![0; 16_000],
            sample_rate: 16_000,
        })
    }
}

/// Recognizer stand-in returning a fixed transcript.
pub struct CannedRecognizer {
    transcript: String,
}

impl CannedRecognizer {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

impl SpeechToText for CannedRecognizer {
    fn transcribe(&self, _clip: &AudioClip) -> Result<String, TranscribeError> {
        Ok(self.transcript.clone())
    }
}
