//! Actuator signalling seam

use tracing::info;

use crate::AlertStatus;

/// Consumer of per-frame driver statuses
///
/// Implemented by actuator integrations (serial buzzer, GPIO pin).
/// The decision core only hands over the status; transport and
/// hardware concerns live behind this trait.
pub trait AlertSink {
    /// Deliver the status for the frame just processed
    fn send(&mut self, status: AlertStatus);
}

/// Sink that logs status transitions
///
/// Stands in for a hardware actuator during development; repeated
/// frames with an unchanged status are not re-logged.
#[derive(Debug, Default)]
pub struct LogSink {
    last: Option<AlertStatus>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last status delivered, if any
    pub fn last(&self) -> Option<AlertStatus> {
        self.last
    }
}

impl AlertSink for LogSink {
    fn send(&mut self, status: AlertStatus) {
        if self.last != Some(status) {
            info!("Driver status changed to {}", status);
            self.last = Some(status);
        }
    }
}
