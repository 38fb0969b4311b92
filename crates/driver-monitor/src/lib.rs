//! Driver Monitoring Session
//!
//! Per-frame pipeline wiring the decision core together:
//! landmarks -> EAR/MAR -> debounced flags -> prioritized status
//!
//! Each processed frame also publishes an immutable snapshot over a
//! watch channel, so display layers read complete frames instead of
//! sharing mutable state with the detection loop.

pub mod session;
pub mod snapshot;

pub use session::{FrameAnalysis, FrameInput, MonitorConfig, MonitorSession};
pub use snapshot::MonitorSnapshot;

use drowsiness::DrowsinessError;
use face_geometry::GeometryError;
use thiserror::Error;

/// Monitor error types
///
/// All variants are per-frame conditions; the session stays usable
/// for subsequent frames after any of them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MonitorError {
    /// Landmark lookup failed or the geometry was degenerate
    #[error("Landmark geometry rejected: {0}")]
    Geometry(#[from] GeometryError),

    /// A computed metric was rejected by the detector boundary
    #[error("Metric rejected: {0}")]
    Metric(#[from] DrowsinessError),
}
