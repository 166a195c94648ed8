//! Runtime configuration

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use drowsiness::DrowsinessConfig;
use serde::Deserialize;
use voice_control::VoiceChannelConfig;

/// Top-level runtime configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CopilotConfig {
    /// Openness values strictly below this count as closed eyes
    pub ear_threshold: f32,

    /// Consecutive closed-eye frames before drowsiness is declared
    pub consecutive_frames_threshold: u32,

    /// Alert sound played when drowsiness is declared
    pub alarm_sound_path: String,

    /// On-screen message lifetime (rendered frames)
    pub message_frames: u32,

    /// Maximum wait for a spoken command (seconds)
    pub listen_timeout_secs: u64,
}

impl Default for CopilotConfig {
    fn default() -> Self {
        Self {
            ear_threshold: 0.20,
            consecutive_frames_threshold: 10,
            alarm_sound_path: "assets/sounds/alert.wav".to_string(),
            message_frames: 150,
            listen_timeout_secs: 5,
        }
    }
}

impl CopilotConfig {
    /// Load from an optional `copilot.toml` plus `COPILOT_*` environment
    /// overrides, on top of the coded defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("ear_threshold", defaults.ear_threshold as f64)?
            .set_default(
                "consecutive_frames_threshold",
                defaults.consecutive_frames_threshold as i64,
            )?
            .set_default("alarm_sound_path", defaults.alarm_sound_path.as_str())?
            .set_default("message_frames", defaults.message_frames as i64)?
            .set_default("listen_timeout_secs", defaults.listen_timeout_secs as i64)?
            .add_source(File::with_name("copilot").required(false))
            .add_source(Environment::with_prefix("COPILOT"))
            .build()?
            .try_deserialize()
    }

    pub fn listen_timeout(&self) -> Duration {
        Duration::from_secs(self.listen_timeout_secs)
    }

    /// Thresholds for the state machine.
    pub fn drowsiness(&self) -> DrowsinessConfig {
        DrowsinessConfig {
            ear_threshold: self.ear_threshold,
            consecutive_frames_threshold: self.consecutive_frames_threshold,
        }
    }

    /// Settings for the voice command channel.
    pub fn voice(&self) -> VoiceChannelConfig {
        VoiceChannelConfig {
            listen_timeout: self.listen_timeout(),
            message_frames: self.message_frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_constant() {
        let cfg = CopilotConfig::default();
        assert!((cfg.ear_threshold - 0.20).abs() < f32::EPSILON);
        assert_eq!(cfg.consecutive_frames_threshold, 10);
        assert_eq!(cfg.message_frames, 150);
        assert_eq!(cfg.listen_timeout(), Duration::from_secs(5));
        assert!(!cfg.alarm_sound_path.is_empty());
    }

    #[test]
    fn test_sub_configs_mirror_the_constants() {
        let cfg = CopilotConfig::default();
        let d = cfg.drowsiness();
        assert_eq!(d.consecutive_frames_threshold, 10);
        let v = cfg.voice();
        assert_eq!(v.message_frames, 150);
    }
}
