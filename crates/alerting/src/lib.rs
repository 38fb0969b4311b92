//! Alert Signalling
//!
//! Collapses per-frame alert flags into one prioritized driver status
//! and defines the seam actuator integrations (serial, GPIO) plug into.

mod sink;
mod status;

pub use sink::{AlertSink, LogSink};
pub use status::AlertStatus;
