//! Landmark points and face-mesh index schemes

use serde::{Deserialize, Serialize};

use crate::GeometryError;

/// A 2D face landmark in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// MediaPipe face-mesh indices for the left eye, ordered as
/// (outer corner, upper lid, upper lid, inner corner, lower lid, lower lid)
pub const LEFT_EYE: [usize; 6] = [33, 160, 158, 133, 153, 144];

/// MediaPipe face-mesh indices for the right eye, mirror of [`LEFT_EYE`]
pub const RIGHT_EYE: [usize; 6] = [263, 387, 385, 362, 380, 373];

/// MediaPipe face-mesh indices for the mouth, ordered as
/// (left corner, upper lip, lower lip, right corner)
pub const MOUTH: [usize; 4] = [61, 13, 14, 291];

/// Ordered landmark collection for one video frame
///
/// Produced by the external face-mesh detector; indices follow the
/// detector's fixed scheme. Looking up an index the mesh does not
/// contain is an explicit error rather than a panic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaceLandmarks {
    points: Vec<Landmark>,
}

impl FaceLandmarks {
    /// Wrap an ordered point list from the detector
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Look up one landmark by mesh index
    pub fn get(&self, index: usize) -> Result<Landmark, GeometryError> {
        self.points
            .get(index)
            .copied()
            .ok_or(GeometryError::MissingLandmark {
                index,
                len: self.points.len(),
            })
    }

    /// Resolve the six eye points addressed by `scheme`
    pub fn eye_points(&self, scheme: &[usize; 6]) -> Result<[Landmark; 6], GeometryError> {
        Ok([
            self.get(scheme[0])?,
            self.get(scheme[1])?,
            self.get(scheme[2])?,
            self.get(scheme[3])?,
            self.get(scheme[4])?,
            self.get(scheme[5])?,
        ])
    }

    /// Resolve the four mouth points addressed by `scheme`
    pub fn mouth_points(&self, scheme: &[usize; 4]) -> Result<[Landmark; 4], GeometryError> {
        Ok([
            self.get(scheme[0])?,
            self.get(scheme[1])?,
            self.get(scheme[2])?,
            self.get(scheme[3])?,
        ])
    }

    /// EAR for the eye addressed by `scheme`
    pub fn eye_aspect_ratio(&self, scheme: &[usize; 6]) -> Result<f32, GeometryError> {
        crate::metrics::eye_aspect_ratio(&self.eye_points(scheme)?)
    }

    /// MAR for the mouth addressed by `scheme`
    pub fn mouth_aspect_ratio(&self, scheme: &[usize; 4]) -> Result<f32, GeometryError> {
        crate::metrics::mouth_aspect_ratio(&self.mouth_points(scheme)?)
    }
}
