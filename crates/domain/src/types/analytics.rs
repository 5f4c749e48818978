//! Derived analytics read models
//!
//! Everything in this module is computed on read from activity logs and
//! goals; none of it is ever persisted.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::activity::EnergyLevel;
use super::goal::DailyGoal;

/// Hours and points accumulated against a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub hours: f64,
    pub points: f64,
}

/// Aggregated view of a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_points: f64,
    pub total_hours: f64,
    /// Totals keyed by category id. Categories with no logged time are
    /// absent rather than zero-valued.
    pub by_category: HashMap<String, CategoryTotals>,
    /// Hours keyed by energy level, sparse like `by_category`.
    pub by_energy_level: HashMap<EnergyLevel, f64>,
}

impl DailySummary {
    /// Summary of a day with no logged activity.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_points: 0.0,
            total_hours: 0.0,
            by_category: HashMap::new(),
            by_energy_level: HashMap::new(),
        }
    }
}

/// Progress of one goal measured against its day's summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal: DailyGoal,
    pub achieved: bool,
    /// Achieved fraction of the target, clamped to be non-negative. A
    /// non-positive target is trivially met and reports 1.0.
    pub ratio: f64,
}

/// Aggregate totals across a date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeTotals {
    pub total_points: f64,
    pub total_hours: f64,
    pub by_category: HashMap<String, CategoryTotals>,
}

/// Per-day summaries plus aggregate totals for an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSummary {
    pub days: Vec<DailySummary>,
    pub totals: RangeTotals,
}
