//! Eye and mouth aspect ratio computation

use crate::landmarks::Landmark;
use crate::GeometryError;

/// Euclidean distance between two landmarks
pub fn euclidean_distance(a: Landmark, b: Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Eye aspect ratio from six ordered eye landmarks
///
/// Points are (outer corner, upper lid, upper lid, inner corner,
/// lower lid, lower lid). The ratio is the averaged vertical opening
/// over the corner-to-corner width; a closed eye approaches zero.
///
/// A zero corner-to-corner span means the detector emitted degenerate
/// points, so the ratio is reported as an error instead of infinity.
pub fn eye_aspect_ratio(points: &[Landmark; 6]) -> Result<f32, GeometryError> {
    let vertical_1 = euclidean_distance(points[1], points[5]);
    let vertical_2 = euclidean_distance(points[2], points[4]);
    let horizontal = euclidean_distance(points[0], points[3]);

    if horizontal > 0.0 {
        Ok((vertical_1 + vertical_2) / (2.0 * horizontal))
    } else {
        Err(GeometryError::DegenerateGeometry { ratio: "EAR" })
    }
}

/// Mouth aspect ratio from four ordered mouth landmarks
///
/// Points are (left corner, upper lip, lower lip, right corner). The
/// ratio is the lip gap over the corner-to-corner width; a wide-open
/// mouth pushes it above 1. Same degenerate-span rule as
/// [`eye_aspect_ratio`].
pub fn mouth_aspect_ratio(points: &[Landmark; 4]) -> Result<f32, GeometryError> {
    let vertical = euclidean_distance(points[1], points[2]);
    let horizontal = euclidean_distance(points[0], points[3]);

    if horizontal > 0.0 {
        Ok(vertical / horizontal)
    } else {
        Err(GeometryError::DegenerateGeometry { ratio: "MAR" })
    }
}
