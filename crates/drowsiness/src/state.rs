//! Driver alertness state

use serde::{Deserialize, Serialize};

/// Driver alertness state for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrowsinessState {
    /// No face visible to the detector
    #[default]
    NoFace,

    /// Eyes open, or closed for fewer frames than the threshold
    Awake,

    /// Sustained eye closure past the frame threshold
    Drowsy,

    /// Detection suspended by the operator
    Disabled,
}
