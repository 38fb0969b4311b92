//! Per-frame monitoring session

use alerting::AlertStatus;
use drowsiness::{AlertFlags, DetectorConfig, DetectorState, DrowsinessDetector, MetricSample};
use face_geometry::{FaceLandmarks, LEFT_EYE, MOUTH};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::snapshot::MonitorSnapshot;
use crate::MonitorError;

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Detector thresholds and frame limits
    pub detector: DetectorConfig,

    /// Mesh indices for the monitored eye
    pub eye_scheme: [usize; 6],

    /// Mesh indices for the mouth
    pub mouth_scheme: [usize; 4],
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            detector: DetectorConfig::default(),
            eye_scheme: LEFT_EYE,
            mouth_scheme: MOUTH,
        }
    }
}

/// Input for one video frame
#[derive(Debug, Clone)]
pub struct FrameInput {
    /// Landmarks from the external face-mesh detector
    pub landmarks: FaceLandmarks,

    /// Head yaw from the external pose solver, when it converged
    pub yaw_degrees: Option<f32>,
}

/// Result of one processed frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameAnalysis {
    /// Metrics computed for the frame
    pub sample: MetricSample,

    /// Debounced alert flags
    pub flags: AlertFlags,

    /// Prioritized driver status
    pub status: AlertStatus,
}

/// One driver's monitoring session
///
/// Owns the detector counters. Frames go through `process` strictly
/// one at a time from a single caller; snapshot readers on other
/// threads subscribe via [`MonitorSession::subscribe`].
pub struct MonitorSession {
    config: MonitorConfig,
    detector: DrowsinessDetector,
    frame_index: u64,
    snapshot_tx: watch::Sender<MonitorSnapshot>,
}

impl MonitorSession {
    /// Create a session with the given configuration
    pub fn new(config: MonitorConfig) -> Self {
        info!("Creating monitor session with config: {:?}", config);
        let (snapshot_tx, _) = watch::channel(MonitorSnapshot::default());
        Self {
            detector: DrowsinessDetector::new(config.detector.clone()),
            config,
            frame_index: 0,
            snapshot_tx,
        }
    }

    /// Subscribe to per-frame snapshots
    ///
    /// The session is the only writer; receivers always see the whole
    /// snapshot of the most recent processed frame.
    pub fn subscribe(&self) -> watch::Receiver<MonitorSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Process one frame
    ///
    /// Returns `Ok(None)` when the pose solver produced no yaw for
    /// the frame: the frame is skipped and the counters stay exactly
    /// as they were. Geometry and metric errors likewise leave the
    /// counters untouched, and the session keeps accepting frames.
    pub fn process(&mut self, input: &FrameInput) -> Result<Option<FrameAnalysis>, MonitorError> {
        let yaw_degrees = match input.yaw_degrees {
            Some(yaw) => yaw,
            None => {
                debug!("Skipping frame: no head pose resolved");
                return Ok(None);
            }
        };

        let analysis = match self.analyze(&input.landmarks, yaw_degrees) {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("Frame rejected: {}", e);
                return Err(e);
            }
        };

        self.frame_index += 1;
        self.snapshot_tx.send_replace(MonitorSnapshot {
            frame_index: self.frame_index,
            ear: analysis.sample.ear,
            mar: analysis.sample.mar,
            yaw_degrees,
            flags: analysis.flags,
            status: analysis.status,
        });

        Ok(Some(analysis))
    }

    fn analyze(
        &mut self,
        landmarks: &FaceLandmarks,
        yaw_degrees: f32,
    ) -> Result<FrameAnalysis, MonitorError> {
        let ear = landmarks.eye_aspect_ratio(&self.config.eye_scheme)?;
        let mar = landmarks.mouth_aspect_ratio(&self.config.mouth_scheme)?;

        let sample = MetricSample::new(ear, mar, yaw_degrees);
        let flags = self.detector.update(sample)?;
        let status = AlertStatus::from_flags(flags);

        Ok(FrameAnalysis {
            sample,
            flags,
            status,
        })
    }

    /// Current debounce counters
    pub fn detector_state(&self) -> DetectorState {
        self.detector.state()
    }

    /// Frames processed so far (skipped frames do not count)
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Reset the detector counters (on driver change)
    pub fn reset(&mut self) {
        self.detector.reset();
    }
}
