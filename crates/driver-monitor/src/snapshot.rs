//! Published per-frame snapshot

use alerting::AlertStatus;
use drowsiness::AlertFlags;
use serde::{Deserialize, Serialize};

/// Immutable view of the most recently processed frame
///
/// Published whole over a watch channel: readers on other threads
/// always observe a complete frame, never a partially updated one.
/// `Default` is the value before the first frame lands.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonitorSnapshot {
    /// Frames processed so far in this session
    pub frame_index: u64,

    /// Eye aspect ratio for the frame
    pub ear: f32,

    /// Mouth aspect ratio for the frame
    pub mar: f32,

    /// Head yaw in degrees
    pub yaw_degrees: f32,

    /// Debounced alert flags
    pub flags: AlertFlags,

    /// Prioritized driver status
    pub status: AlertStatus,
}
