//! Face Geometry
//!
//! Pure geometric features computed from 2D face landmarks:
//! - Eye Aspect Ratio (EAR) for eye-closure detection
//! - Mouth Aspect Ratio (MAR) for yawn detection
//! - Mesh index schemes for the external landmark detector

pub mod landmarks;
pub mod metrics;

pub use landmarks::{FaceLandmarks, Landmark, LEFT_EYE, MOUTH, RIGHT_EYE};
pub use metrics::{euclidean_distance, eye_aspect_ratio, mouth_aspect_ratio};

use thiserror::Error;

/// Geometry error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The mesh does not contain the requested index
    #[error("Landmark index {index} not present in mesh of {len} points")]
    MissingLandmark { index: usize, len: usize },

    /// The corner-to-corner span of the region is zero, so the aspect
    /// ratio is undefined
    #[error("{ratio} horizontal span is zero, landmarks are degenerate")]
    DegenerateGeometry { ratio: &'static str },
}
