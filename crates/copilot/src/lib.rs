//! Drowsiness Safety Co-Pilot
//!
//! Wires the detection pipeline together:
//! - Per-frame flow: landmarks -> openness metric -> state machine -> alarm
//! - Out-of-band operator voice channel gating the whole system
//! - HUD data composition for the rendering layer

pub mod config;
pub mod hud;
pub mod pipeline;
pub mod sim;

pub use config::CopilotConfig;
pub use hud::HudFrame;
pub use pipeline::FramePipeline;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
