//! Port interfaces for daily goal persistence

use async_trait::async_trait;
use chrono::NaiveDate;
use dayscore_domain::{DailyGoal, Result};

/// Persistence boundary for daily goals
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Fetch a goal by id.
    async fn get(&self, id: &str) -> Result<Option<DailyGoal>>;

    /// Insert or replace a goal (last write wins).
    async fn put(&self, goal: DailyGoal) -> Result<()>;

    /// Delete a goal by id. Deleting an absent id is a no-op.
    async fn delete(&self, id: &str) -> Result<()>;

    /// List all goals.
    async fn list(&self) -> Result<Vec<DailyGoal>>;

    /// All goals attached to `date`.
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<DailyGoal>>;
}
