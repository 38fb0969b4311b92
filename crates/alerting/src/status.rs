//! Driver status mapping

use std::fmt;

use drowsiness::AlertFlags;
use serde::{Deserialize, Serialize};

/// Discrete driver status for display and actuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    /// Sustained eye closure
    Drowsy,

    /// Sustained mouth opening
    Yawn,

    /// Head turned away from the road
    Distracted,

    /// No alert active
    #[default]
    Normal,
}

impl AlertStatus {
    /// Collapse alert flags into one status
    ///
    /// Priority order is fixed: drowsy > yawn > distracted > normal.
    /// The first raised flag in that order wins.
    pub fn from_flags(flags: AlertFlags) -> Self {
        if flags.drowsy {
            Self::Drowsy
        } else if flags.yawn {
            Self::Yawn
        } else if flags.distracted {
            Self::Distracted
        } else {
            Self::Normal
        }
    }

    /// Wire form consumed by display and actuator integrations
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drowsy => "DROWSY",
            Self::Yawn => "YAWN",
            Self::Distracted => "DISTRACTED",
            Self::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AlertFlags> for AlertStatus {
    fn from(flags: AlertFlags) -> Self {
        Self::from_flags(flags)
    }
}
