//! Safety Co-Pilot - Demo Entry Point
//!
//! Drives the detection pipeline over a scripted openness sequence with
//! simulated collaborators: attentive driving, a detector dropout, an
//! operator disable/enable voice exchange, and a sustained closure that
//! trips the alarm.

use std::sync::Arc;
use std::time::Duration;

use alarm::AlarmTrigger;
use anyhow::Result;
use copilot::sim::{CannedCapture, CannedRecognizer, ConsoleAlarm, ScriptedLandmarkSource};
use copilot::{hud, init_logging, CopilotConfig, FramePipeline};
use drowsiness::DrowsinessMonitor;
use eye_metrics::{FrameSize, LandmarkSource};
use session::{AlertGate, MessageBoard};
use tracing::info;
use voice_control::VoiceCommandChannel;

fn demo_script() -> Vec<Option<f32>> {
    let mut script = Vec::new();
    // Attentive driving, then a brief detector dropout.
    script.extend(std::iter::repeat(Some(0.32)).take(45));
    script.extend(std::iter::repeat(None).take(15));
    script.extend(std::iter::repeat(Some(0.32)).take(30));
    // Sustained closure long enough to trip the alarm.
    script.extend(std::iter::repeat(Some(0.10)).take(30));
    // Recovery.
    script.extend(std::iter::repeat(Some(0.32)).take(30));
    script
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!("=== Safety Co-Pilot v{} ===", env!("CARGO_PKG_VERSION"));

    let config = CopilotConfig::load()?;
    let frame = FrameSize::new(854, 480);

    let gate = AlertGate::default();
    let messages = MessageBoard::new();
    let trigger = AlarmTrigger::new(config.alarm_sound_path.clone(), Arc::new(ConsoleAlarm));
    let monitor = DrowsinessMonitor::new(config.drowsiness());
    let mut pipeline = FramePipeline::new(monitor, trigger, gate.clone());

    let mut source = ScriptedLandmarkSource::new(demo_script());

    // Simulated operator: disables alerts mid-run, then re-enables them.
    let disable_command = VoiceCommandChannel::new(
        CannedCapture,
        CannedRecognizer::new("disable the alerts"),
        gate.clone(),
        messages.clone(),
        config.voice(),
    );
    let enable_command = VoiceCommandChannel::new(
        CannedCapture,
        CannedRecognizer::new("enable the alerts"),
        gate.clone(),
        messages.clone(),
        config.voice(),
    );

    let mut ticker = tokio::time::interval(Duration::from_millis(33));
    let mut frame_no = 0u32;
    let mut last_status = "";
    let mut last_message = None;

    while !source.finished() {
        ticker.tick().await;
        frame_no += 1;

        if frame_no == 20 {
            let _ = disable_command.spawn();
        }
        if frame_no == 40 {
            let _ = enable_command.spawn();
        }

        let face = source.detect(&frame);
        let assessment = pipeline.process_frame(face.as_ref(), frame);
        let hud = hud::compose(&assessment, gate.is_enabled(), &messages);

        if hud.status != last_status {
            match hud.openness {
                Some(ear) => info!("frame {}: {} (EAR: {:.2})", frame_no, hud.status, ear),
                None => info!("frame {}: {}", frame_no, hud.status),
            }
            last_status = hud.status;
        }
        if hud.message != last_message {
            if let Some(message) = &hud.message {
                info!("frame {}: message: {}", frame_no, message);
            }
            last_message = hud.message;
        }
    }

    info!("demo finished after {} frames", frame_no);
    Ok(())
}
