//! Debounced drowsiness state machine

use tracing::info;

use crate::{DrowsinessConfig, DrowsinessState};

/// Input for a single frame tick
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Alert gate reading for this frame
    pub alerts_enabled: bool,

    /// Averaged eye openness, `None` when no face was detected
    pub openness: Option<f32>,
}

/// Outcome of a single frame tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameAssessment {
    pub state: DrowsinessState,

    /// Openness carried through for display, when one was measured
    pub openness: Option<f32>,

    /// Set on the single frame where a new alarm playback should start
    pub alarm_requested: bool,
}

/// Per-frame drowsiness state machine.
///
/// Counts consecutive frames whose openness falls strictly below the
/// threshold and flips to `Drowsy` once the run is long enough. One alarm
/// request is issued per sustained closure; the request latch clears when
/// the eyes reopen or the face is lost, so a still-closed streak never
/// piles up playback requests. The counter is not reset by the alarm
/// firing, only by an open-eye frame, a no-face frame, or the gate being
/// off.
pub struct DrowsinessMonitor {
    config: DrowsinessConfig,
    consecutive_low_frames: u32,
    state: DrowsinessState,
    alarm_latched: bool,
}

impl DrowsinessMonitor {
    pub fn new(config: DrowsinessConfig) -> Self {
        Self {
            config,
            consecutive_low_frames: 0,
            state: DrowsinessState::default(),
            alarm_latched: false,
        }
    }

    pub fn state(&self) -> DrowsinessState {
        self.state
    }

    pub fn consecutive_low_frames(&self) -> u32 {
        self.consecutive_low_frames
    }

    /// Advance the machine by one captured frame.
    pub fn tick(&mut self, input: FrameInput) -> FrameAssessment {
        if !input.alerts_enabled {
            self.consecutive_low_frames = 0;
            self.set_state(DrowsinessState::Disabled);
            return FrameAssessment {
                state: self.state,
                openness: None,
                alarm_requested: false,
            };
        }

        let Some(openness) = input.openness else {
            self.consecutive_low_frames = 0;
            self.alarm_latched = false;
            self.set_state(DrowsinessState::NoFace);
            return FrameAssessment {
                state: self.state,
                openness: None,
                alarm_requested: false,
            };
        };

        if openness < self.config.ear_threshold {
            self.consecutive_low_frames += 1;
        } else {
            // An exactly-at-threshold frame counts as open.
            self.consecutive_low_frames = 0;
            self.alarm_latched = false;
            self.set_state(DrowsinessState::Awake);
            return FrameAssessment {
                state: self.state,
                openness: Some(openness),
                alarm_requested: false,
            };
        }

        let mut alarm_requested = false;
        if self.consecutive_low_frames >= self.config.consecutive_frames_threshold {
            self.set_state(DrowsinessState::Drowsy);
            if !self.alarm_latched {
                self.alarm_latched = true;
                alarm_requested = true;
            }
        } else {
            self.set_state(DrowsinessState::Awake);
        }

        FrameAssessment {
            state: self.state,
            openness: Some(openness),
            alarm_requested,
        }
    }

    /// Forget any in-progress closure, e.g. on a driver change.
    pub fn reset(&mut self) {
        self.consecutive_low_frames = 0;
        self.alarm_latched = false;
        self.state = DrowsinessState::default();
    }

    fn set_state(&mut self, next: DrowsinessState) {
        if self.state != next {
            info!("driver state: {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}
