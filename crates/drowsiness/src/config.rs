//! Detector configuration

use serde::{Deserialize, Serialize};

/// Drowsiness detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// EAR below this value counts as a closed-eye frame
    pub ear_threshold: f32,

    /// Consecutive closed-eye frames before the drowsy alert raises
    pub ear_frame_limit: u32,

    /// MAR above this value counts as a yawning frame
    pub mar_threshold: f32,

    /// Consecutive yawning frames before the yawn alert raises
    pub yawn_frame_limit: u32,

    /// Head yaw magnitude (degrees) beyond which the driver counts as
    /// distracted
    pub yaw_threshold_degrees: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            ear_threshold: 0.25,
            ear_frame_limit: 20,
            mar_threshold: 0.6,
            yawn_frame_limit: 15,
            yaw_threshold_degrees: 25.0,
        }
    }
}

impl DetectorConfig {
    /// Create strict config (alerts raise on less evidence)
    pub fn strict() -> Self {
        Self {
            ear_frame_limit: 10,
            yawn_frame_limit: 8,
            yaw_threshold_degrees: 20.0,
            ..Default::default()
        }
    }

    /// Create lenient config (alerts need longer evidence)
    pub fn lenient() -> Self {
        Self {
            ear_frame_limit: 30,
            yawn_frame_limit: 25,
            yaw_threshold_degrees: 35.0,
            ..Default::default()
        }
    }
}
