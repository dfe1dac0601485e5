use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Coarse time-of-day bucket used for peaks, energy, and habit cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Bucket for a clock hour (0-23).
    /// morning 05-12, afternoon 12-17, evening 17-21, night 21-05.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn from_timestamp(ts: DateTime<Utc>) -> Self {
        Self::from_hour(ts.hour())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    /// Human-readable clock range presented as a productivity peak.
    pub fn peak_range(self) -> &'static str {
        match self {
            Self::Morning => "06:00-12:00",
            Self::Afternoon => "12:00-17:00",
            Self::Evening => "17:00-21:00",
            Self::Night => "21:00-02:00",
        }
    }
}
