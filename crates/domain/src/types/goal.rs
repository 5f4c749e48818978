//! Daily goal types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::new_id;

/// Target a day must reach for a goal to count as achieved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoalTarget {
    /// Total points for the day must reach `points`.
    MinPoints { points: f64 },
    /// Hours summed over `category_ids` must reach `hours`. An empty list
    /// means hours across all categories.
    MinHours {
        hours: f64,
        #[serde(default)]
        category_ids: Vec<String>,
    },
}

impl GoalTarget {
    /// The numeric magnitude the day is measured against.
    pub fn magnitude(&self) -> f64 {
        match self {
            Self::MinPoints { points } => *points,
            Self::MinHours { hours, .. } => *hours,
        }
    }
}

/// A goal attached to a calendar day.
///
/// Progress is never stored; the analytics service recomputes it on read
/// from whatever activity exists at that moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGoal {
    pub id: String,
    pub date: NaiveDate,
    pub target: GoalTarget,
}

impl DailyGoal {
    /// Build a goal with a freshly generated id.
    pub fn new(date: NaiveDate, target: GoalTarget) -> Self {
        Self { id: new_id(), date, target }
    }
}
