//! Detector state and per-frame alert flags

use serde::{Deserialize, Serialize};

/// Alert flags for one processed frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlertFlags {
    /// Eyes closed long enough to indicate drowsiness
    pub drowsy: bool,

    /// Mouth open long enough to indicate yawning
    pub yawn: bool,

    /// Head turned away from the road
    pub distracted: bool,
}

impl AlertFlags {
    /// Whether any alert is raised
    pub fn any(&self) -> bool {
        self.drowsy || self.yawn || self.distracted
    }
}

/// Debounce counters tracked across frames
///
/// A plain value so a session can be snapshotted and restored. The
/// counters hold consecutive-frame counts, never running totals; one
/// frame on the safe side of a threshold resets the matching counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetectorState {
    /// Consecutive frames with EAR below threshold
    pub closed_eye_frames: u32,

    /// Consecutive frames with MAR above threshold
    pub yawn_frames: u32,
}

impl DetectorState {
    /// Reset counters (on driver change)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
