//! Process-wide session state
//!
//! Two pieces of state shared between the per-frame pipeline, the voice
//! command channel, and the rendering layer:
//! - The alert gate (detection on/off switch)
//! - The transient on-screen message and its remaining lifetime

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Enable/disable switch for the whole detection pipeline.
///
/// Written by the voice command channel, read once per frame by the
/// pipeline. Cloned handles share the same flag.
#[derive(Debug, Clone)]
pub struct AlertGate {
    enabled: Arc<AtomicBool>,
}

impl AlertGate {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn set_enabled(&self, enabled: bool) {
        let was = self.enabled.swap(enabled, Ordering::SeqCst);
        if was != enabled {
            debug!("alert gate {}", if enabled { "enabled" } else { "disabled" });
        }
    }
}

impl Default for AlertGate {
    /// Alerts start enabled.
    fn default() -> Self {
        Self::new(true)
    }
}

/// A user-facing notice with a finite lifetime measured in rendered frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub text: String,
    /// Rendered frames the message is still visible for, this one included.
    pub frames_left: u32,
}

/// Single-slot holder for the current transient message.
///
/// The voice command channel posts into the slot; the rendering layer calls
/// [`MessageBoard::take_frame`] exactly once per rendered frame, which
/// decrements the lifetime and clears the slot when it runs out. A newer
/// post replaces whatever is currently showing.
#[derive(Debug, Clone, Default)]
pub struct MessageBoard {
    slot: Arc<Mutex<Option<TransientMessage>>>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current message. A zero-frame lifetime never shows.
    pub fn post(&self, text: impl Into<String>, frames: u32) {
        if frames == 0 {
            return;
        }
        let mut slot = self.lock();
        *slot = Some(TransientMessage {
            text: text.into(),
            frames_left: frames,
        });
    }

    /// Current message without consuming a frame of its lifetime.
    pub fn peek(&self) -> Option<TransientMessage> {
        self.lock().clone()
    }

    /// The message to draw this rendered frame, if any.
    ///
    /// Consumes one frame of the message's lifetime; the slot empties once
    /// the count reaches zero.
    pub fn take_frame(&self) -> Option<TransientMessage> {
        let mut slot = self.lock();
        let msg = slot.as_mut()?;
        let shown = msg.clone();
        msg.frames_left -= 1;
        if msg.frames_left == 0 {
            *slot = None;
        }
        Some(shown)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<TransientMessage>> {
        // A panic while holding the lock leaves the message intact.
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}
