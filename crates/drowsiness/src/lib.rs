//! Drowsiness Detection
//!
//! Turns the per-frame eye-openness signal into an AWAKE/DROWSY decision:
//! - Consecutive low-openness frame counting (blink debounce)
//! - State transitions gated by the operator's alert switch
//! - One alarm request per sustained closure

pub mod config;
pub mod monitor;
pub mod state;

pub use config::DrowsinessConfig;
pub use monitor::{DrowsinessMonitor, FrameAssessment, FrameInput};
pub use state::DrowsinessState;
