//! Drowsiness Decision Core
//!
//! Turns noisy per-frame face metrics into debounced driver alerts:
//! - Eye closure (EAR below threshold for N consecutive frames)
//! - Yawning (MAR above threshold for N consecutive frames)
//! - Distraction (head yaw beyond threshold, checked per frame)

pub mod config;
pub mod detector;
pub mod state;

pub use config::DetectorConfig;
pub use detector::{step, DrowsinessDetector, MetricSample};
pub use state::{AlertFlags, DetectorState};

use thiserror::Error;

/// Detector error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrowsinessError {
    /// NaN or infinite metric; comparisons against NaN are always
    /// false and would silently hold alerts off, so such samples are
    /// rejected before they reach the counters
    #[error("Non-finite {name} value {value} rejected")]
    NonFiniteMetric { name: &'static str, value: f32 },
}
