//! Per-frame detection pipeline

use alarm::AlarmTrigger;
use drowsiness::{DrowsinessMonitor, FrameAssessment, FrameInput};
use eye_metrics::{average_openness, FaceLandmarks, FrameSize};
use session::AlertGate;

/// Synchronous per-frame flow: gate -> openness metric -> state machine ->
/// alarm request.
///
/// Runs once per captured frame and never blocks; alarm playback happens on
/// the trigger's background worker.
pub struct FramePipeline {
    monitor: DrowsinessMonitor,
    alarm: AlarmTrigger,
    gate: AlertGate,
}

impl FramePipeline {
    pub fn new(monitor: DrowsinessMonitor, alarm: AlarmTrigger, gate: AlertGate) -> Self {
        Self {
            monitor,
            alarm,
            gate,
        }
    }

    /// Process one captured frame's landmark result.
    ///
    /// The gate is read exactly once; while disabled no openness is
    /// computed at all.
    pub fn process_frame(
        &mut self,
        face: Option<&FaceLandmarks>,
        frame: FrameSize,
    ) -> FrameAssessment {
        let alerts_enabled = self.gate.is_enabled();
        let openness = if alerts_enabled {
            face.map(|f| average_openness(f, frame))
        } else {
            None
        };

        let assessment = self.monitor.tick(FrameInput {
            alerts_enabled,
            openness,
        });

        if assessment.alarm_requested {
            self.alarm.request();
        }

        assessment
    }

    pub fn gate(&self) -> &AlertGate {
        &self.gate
    }
}
