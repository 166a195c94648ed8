//! Eye Geometry Metrics
//!
//! Converts per-frame eye landmarks into a scalar openness value:
//! - Normalized landmark types and the external detector boundary
//! - Eye Aspect Ratio (EAR): vertical lid separation over horizontal width
//! - Two-eye averaging for the per-frame openness signal

pub mod ear;
pub mod landmarks;

pub use ear::{average_openness, eye_aspect_ratio};
pub use landmarks::{EyeLandmarks, FaceLandmarks, FrameSize, LandmarkPoint, LandmarkSource};
