//! Domain types and models

pub mod activity;
pub mod analytics;
pub mod category;
pub mod goal;
pub mod task;

pub use activity::{ActivityDraft, ActivityLog, EnergyLevel};
pub use analytics::{CategoryTotals, DailySummary, GoalProgress, RangeSummary, RangeTotals};
pub use category::ActivityCategory;
pub use goal::{DailyGoal, GoalTarget};
pub use task::Task;

use uuid::Uuid;

/// Generate a fresh opaque identifier.
///
/// Identifiers are generated by callers and treated as opaque strings by
/// every layer below; the store never derives meaning from their contents.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
