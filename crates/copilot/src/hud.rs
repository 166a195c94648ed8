//! HUD data for the rendering layer
//!
//! The core does no drawing. This module assembles everything the external
//! rendering layer needs for one frame: status bar text and color, the EAR
//! readout, the alerts ON/OFF banner, key hints, and the transient message
//! (whose per-rendered-frame lifetime is consumed here).

use drowsiness::{DrowsinessState, FrameAssessment};
use session::MessageBoard;

/// RGB color triple
pub type Rgb = (u8, u8, u8);

pub const TEXT_COLOR: Rgb = (255, 255, 255);
pub const AWAKE_COLOR: Rgb = (0, 255, 0);
pub const DROWSY_COLOR: Rgb = (255, 0, 0);
pub const DISABLED_COLOR: Rgb = (80, 80, 80);
pub const MESSAGE_COLOR: Rgb = (255, 255, 0);

pub const KEY_HINTS: &str = "[C] to Command | [Q] to Quit";

/// Status bar label for a state.
pub fn status_label(state: DrowsinessState) -> &'static str {
    match state {
        DrowsinessState::NoFace => "STATUS: NO FACE DETECTED",
        DrowsinessState::Awake => "STATUS: AWAKE",
        DrowsinessState::Drowsy => "STATUS: DROWSY",
        DrowsinessState::Disabled => "ALERTS DISABLED",
    }
}

/// Status bar color for a state.
pub fn status_color(state: DrowsinessState) -> Rgb {
    match state {
        DrowsinessState::Awake => AWAKE_COLOR,
        DrowsinessState::Drowsy => DROWSY_COLOR,
        DrowsinessState::NoFace | DrowsinessState::Disabled => DISABLED_COLOR,
    }
}

/// Everything the rendering layer draws for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudFrame {
    pub status: &'static str,
    pub status_color: Rgb,

    /// EAR readout, shown only when a face was measured this frame
    pub openness: Option<f32>,

    pub alerts_banner: &'static str,
    pub alerts_banner_color: Rgb,

    /// Transient message for this rendered frame, key hints otherwise
    pub message: Option<String>,
}

/// Compose the HUD for one rendered frame.
///
/// Call exactly once per rendered frame: pulling the transient message here
/// is what decrements its remaining lifetime.
pub fn compose(assessment: &FrameAssessment, alerts_enabled: bool, messages: &MessageBoard) -> HudFrame {
    let (alerts_banner, alerts_banner_color) = if alerts_enabled {
        ("Alerts: ON", AWAKE_COLOR)
    } else {
        ("Alerts: OFF", DROWSY_COLOR)
    };

    HudFrame {
        status: status_label(assessment.state),
        status_color: status_color(assessment.state),
        openness: assessment.openness,
        alerts_banner,
        alerts_banner_color,
        message: messages.take_frame().map(|m| m.text),
    }
}
