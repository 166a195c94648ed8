//! Drowsiness detection configuration

use serde::{Deserialize, Serialize};

/// Detection thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrowsinessConfig {
    /// Openness values strictly below this count as a closed-eye frame
    pub ear_threshold: f32,

    /// Consecutive closed-eye frames before the driver counts as drowsy
    pub consecutive_frames_threshold: u32,
}

impl Default for DrowsinessConfig {
    fn default() -> Self {
        Self {
            ear_threshold: 0.20,
            consecutive_frames_threshold: 10,
        }
    }
}

impl DrowsinessConfig {
    /// Lenient calibration: lower threshold, longer closure required.
    pub fn lenient() -> Self {
        Self {
            ear_threshold: 0.18,
            consecutive_frames_threshold: 20,
        }
    }
}
