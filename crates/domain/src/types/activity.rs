//! Activity log types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::new_id;

/// Subjective energy level recorded alongside each activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

impl FromStr for EnergyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Invalid EnergyLevel: {s}")),
        }
    }
}

/// A logged activity with its derived scoring fields.
///
/// `duration_ms`, `points`, and `date` are materialized from the other
/// fields at write time and stay fixed until the log itself is rewritten.
/// Editing the referenced category never changes an existing log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: String,
    pub name: String,
    /// Must reference an existing category at write time.
    pub category_id: String,
    pub start_time: DateTime<Utc>,
    /// Strictly after `start_time`.
    pub end_time: DateTime<Utc>,
    /// Milliseconds between start and end. Always positive.
    pub duration_ms: i64,
    /// Snapshot of hours x category points taken when the log was written.
    pub points: f64,
    pub energy_level: EnergyLevel,
    /// Calendar day of `start_time` in local time. Primary aggregation key.
    pub date: NaiveDate,
}

/// Caller-supplied portion of an activity log.
///
/// Derived fields are not representable here; the activity service stamps
/// them through the scoring engine on every write, so duration, points, and
/// date can never drift from their source fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub energy_level: EnergyLevel,
}

impl ActivityDraft {
    /// Build a draft with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        category_id: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        energy_level: EnergyLevel,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            category_id: category_id.into(),
            start_time,
            end_time,
            energy_level,
        }
    }
}
