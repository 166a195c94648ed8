//! Alarm Trigger
//!
//! Starts the alert sound on a background worker and guarantees at most
//! one playback is in flight at a time. Requests while busy are dropped,
//! not queued; playback failures are logged and never reach the per-frame
//! pipeline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Playback error types
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("alert sound not found: {0}")]
    MissingFile(String),

    #[error("audio device error: {0}")]
    Device(String),
}

/// External audio playback boundary.
///
/// `play` blocks until the sound finishes; the trigger wraps every call in
/// a background task so the caller never waits on it.
pub trait AlarmSound: Send + Sync + 'static {
    fn play(&self, path: &str) -> Result<(), PlaybackError>;
}

/// Fire-and-forget alert trigger with a single-playback guarantee.
///
/// The busy flag is the one field touched by both the per-frame flow
/// (claiming it) and the playback worker (releasing it), so it is an
/// atomic claimed with `compare_exchange`.
pub struct AlarmTrigger {
    sound_path: String,
    player: Arc<dyn AlarmSound>,
    playing: Arc<AtomicBool>,
}

impl AlarmTrigger {
    pub fn new(sound_path: impl Into<String>, player: Arc<dyn AlarmSound>) -> Self {
        Self {
            sound_path: sound_path.into(),
            player,
            playing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start the alert sound unless a playback is already in flight.
    ///
    /// Returns whether a new playback was launched. Must be called from
    /// within a tokio runtime.
    pub fn request(&self) -> bool {
        if self
            .playing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("alarm request dropped: playback already in flight");
            return false;
        }

        info!("starting alert playback: {}", self.sound_path);
        let player = Arc::clone(&self.player);
        let playing = Arc::clone(&self.playing);
        let path = self.sound_path.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = player.play(&path) {
                error!("alert playback failed: {}", e);
            }
            playing.store(false, Ordering::SeqCst);
        });
        true
    }

    /// Whether a playback is currently in flight.
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}
