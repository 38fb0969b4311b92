//! Debounced drowsiness decision logic

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DetectorConfig;
use crate::state::{AlertFlags, DetectorState};
use crate::DrowsinessError;

/// Face metrics for a single video frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Eye aspect ratio
    pub ear: f32,

    /// Mouth aspect ratio
    pub mar: f32,

    /// Head yaw in degrees, zero when facing forward
    pub yaw_degrees: f32,
}

impl MetricSample {
    pub fn new(ear: f32, mar: f32, yaw_degrees: f32) -> Self {
        Self {
            ear,
            mar,
            yaw_degrees,
        }
    }

    /// Check all metrics are finite
    pub fn validate(&self) -> Result<(), DrowsinessError> {
        let fields = [
            ("ear", self.ear),
            ("mar", self.mar),
            ("yaw", self.yaw_degrees),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(DrowsinessError::NonFiniteMetric { name, value });
            }
        }
        Ok(())
    }
}

/// Advance the detector by one frame
///
/// Pure transition function: the returned state replaces `state`, the
/// flags describe the frame just processed. Metrics are assumed finite;
/// [`DrowsinessDetector::update`] validates them first.
///
/// Eye closure and yawning are debounced over consecutive frames.
/// Distraction is level-detected on the single frame, with no debounce.
pub fn step(
    config: &DetectorConfig,
    state: DetectorState,
    sample: MetricSample,
) -> (DetectorState, AlertFlags) {
    let mut next = state;

    // Eye logic
    if sample.ear < config.ear_threshold {
        next.closed_eye_frames = next.closed_eye_frames.saturating_add(1);
    } else {
        next.closed_eye_frames = 0;
    }

    // Yawn logic
    if sample.mar > config.mar_threshold {
        next.yawn_frames = next.yawn_frames.saturating_add(1);
    } else {
        next.yawn_frames = 0;
    }

    let flags = AlertFlags {
        drowsy: next.closed_eye_frames >= config.ear_frame_limit,
        yawn: next.yawn_frames >= config.yawn_frame_limit,
        distracted: sample.yaw_degrees.abs() > config.yaw_threshold_degrees,
    };

    (next, flags)
}

/// Stateful detector for one monitoring session
///
/// Owns the debounce counters for a single driver. Counters are
/// mutated in place, so callers feed frames through one instance
/// strictly in sequence.
pub struct DrowsinessDetector {
    config: DetectorConfig,
    state: DetectorState,
    last_flags: AlertFlags,
}

impl DrowsinessDetector {
    /// Create a detector with the given configuration
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            state: DetectorState::default(),
            last_flags: AlertFlags::default(),
        }
    }

    /// Process metrics for one frame
    ///
    /// Non-finite metrics are rejected before any counter is touched;
    /// the frame simply does not happen as far as the counters are
    /// concerned.
    pub fn update(&mut self, sample: MetricSample) -> Result<AlertFlags, DrowsinessError> {
        sample.validate()?;

        let (next, flags) = step(&self.config, self.state, sample);
        self.state = next;

        if flags != self.last_flags {
            debug!(
                "Alert flags changed: drowsy={} yawn={} distracted={}",
                flags.drowsy, flags.yawn, flags.distracted
            );
        }
        self.last_flags = flags;

        Ok(flags)
    }

    /// Current debounce counters
    pub fn state(&self) -> DetectorState {
        self.state
    }

    /// Replace the counters, e.g. when resuming a snapshotted session
    pub fn restore(&mut self, state: DetectorState) {
        self.state = state;
    }

    /// Configuration in use
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Reset counters (on driver change)
    pub fn reset(&mut self) {
        self.state.reset();
        self.last_flags = AlertFlags::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benign() -> MetricSample {
        MetricSample::new(0.35, 0.2, 0.0)
    }

    fn detector(ear_frame_limit: u32, yawn_frame_limit: u32) -> DrowsinessDetector {
        DrowsinessDetector::new(DetectorConfig {
            ear_frame_limit,
            yawn_frame_limit,
            ..Default::default()
        })
    }

    #[test]
    fn test_drowsy_raises_exactly_at_frame_limit() {
        let mut det = detector(3, 15);
        let closed = MetricSample::new(0.2, 0.2, 0.0);

        assert!(!det.update(closed).unwrap().drowsy);
        assert!(!det.update(closed).unwrap().drowsy);
        assert!(det.update(closed).unwrap().drowsy);
        // Holds while the input stays closed
        assert!(det.update(closed).unwrap().drowsy);
    }

    #[test]
    fn test_eye_counter_reset_mid_sequence() {
        // One open frame restarts the debounce from zero
        let mut det = detector(3, 15);
        let expected = [false, false, false, false, false, true];

        for (ear, want) in [0.20, 0.20, 0.30, 0.20, 0.20, 0.20].iter().zip(expected) {
            let flags = det.update(MetricSample::new(*ear, 0.2, 0.0)).unwrap();
            assert_eq!(flags.drowsy, want);
        }
    }

    #[test]
    fn test_open_frame_resets_regardless_of_count() {
        let mut det = detector(50, 15);
        let closed = MetricSample::new(0.1, 0.2, 0.0);

        for _ in 0..40 {
            det.update(closed).unwrap();
        }
        assert_eq!(det.state().closed_eye_frames, 40);

        det.update(benign()).unwrap();
        assert_eq!(det.state().closed_eye_frames, 0);
    }

    #[test]
    fn test_yawn_debounce_and_reset() {
        let mut det = detector(20, 2);
        let yawning = MetricSample::new(0.35, 0.8, 0.0);

        assert!(!det.update(yawning).unwrap().yawn);
        assert!(det.update(yawning).unwrap().yawn);

        det.update(benign()).unwrap();
        assert_eq!(det.state().yawn_frames, 0);
    }

    #[test]
    fn test_distraction_has_no_debounce() {
        let mut det = DrowsinessDetector::new(DetectorConfig::default());

        let flags = det.update(MetricSample::new(0.35, 0.2, 30.0)).unwrap();
        assert!(flags.distracted);

        let flags = det.update(MetricSample::new(0.35, 0.2, 20.0)).unwrap();
        assert!(!flags.distracted);

        // Magnitude check, sign does not matter
        let flags = det.update(MetricSample::new(0.35, 0.2, -30.0)).unwrap();
        assert!(flags.distracted);
    }

    #[test]
    fn test_threshold_boundaries_are_exclusive() {
        let mut det = DrowsinessDetector::new(DetectorConfig::default());

        // EAR equal to the threshold is an open eye
        det.update(MetricSample::new(0.25, 0.2, 0.0)).unwrap();
        assert_eq!(det.state().closed_eye_frames, 0);

        // MAR equal to the threshold is not a yawn
        det.update(MetricSample::new(0.35, 0.6, 0.0)).unwrap();
        assert_eq!(det.state().yawn_frames, 0);

        // Yaw equal to the threshold is not distraction
        let flags = det.update(MetricSample::new(0.35, 0.2, 25.0)).unwrap();
        assert!(!flags.distracted);
    }

    #[test]
    fn test_non_finite_metric_rejected_before_state_change() {
        let mut det = detector(3, 15);
        det.update(MetricSample::new(0.1, 0.2, 0.0)).unwrap();

        let err = det.update(MetricSample::new(f32::NAN, 0.2, 0.0));
        assert!(matches!(
            err,
            Err(DrowsinessError::NonFiniteMetric { name: "ear", .. })
        ));
        assert_eq!(det.state().closed_eye_frames, 1);

        let err = det.update(MetricSample::new(0.1, 0.2, f32::INFINITY));
        assert!(matches!(
            err,
            Err(DrowsinessError::NonFiniteMetric { name: "yaw", .. })
        ));
        assert_eq!(det.state().closed_eye_frames, 1);
    }

    #[test]
    fn test_reset_clears_counters() {
        let mut det = detector(3, 2);
        let bad = MetricSample::new(0.1, 0.8, 0.0);
        det.update(bad).unwrap();
        det.update(bad).unwrap();

        det.reset();
        assert_eq!(det.state(), DetectorState::default());
        assert!(!det.update(bad).unwrap().yawn);
    }

    #[test]
    fn test_state_snapshot_restore_resumes_debounce() {
        let mut det = detector(3, 15);
        let closed = MetricSample::new(0.2, 0.2, 0.0);
        det.update(closed).unwrap();
        det.update(closed).unwrap();

        // Snapshot after two closed frames, resume in a fresh detector
        let json = serde_json::to_string(&det.state()).unwrap();
        let restored: DetectorState = serde_json::from_str(&json).unwrap();

        let mut resumed = detector(3, 15);
        resumed.restore(restored);
        assert!(resumed.update(closed).unwrap().drowsy);
    }

    #[test]
    fn test_pure_step_leaves_input_state_untouched() {
        let config = DetectorConfig::default();
        let state = DetectorState::default();
        let closed = MetricSample::new(0.1, 0.2, 0.0);

        let (next, _) = step(&config, state, closed);
        assert_eq!(state.closed_eye_frames, 0);
        assert_eq!(next.closed_eye_frames, 1);
    }
}
