//! Port interfaces for activity log persistence

use async_trait::async_trait;
use chrono::NaiveDate;
use dayscore_domain::{ActivityLog, Result};

/// Persistence boundary for activity logs
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Fetch a log by id.
    async fn get(&self, id: &str) -> Result<Option<ActivityLog>>;

    /// Insert or replace a log (last write wins).
    async fn put(&self, log: ActivityLog) -> Result<()>;

    /// Delete a log by id. Deleting an absent id is a no-op.
    async fn delete(&self, id: &str) -> Result<()>;

    /// List all logs.
    async fn list(&self) -> Result<Vec<ActivityLog>>;

    /// All logs whose derived date equals `date`, in start order.
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<ActivityLog>>;

    /// Number of logs referencing the category. Backs the delete guard
    /// without loading the logs themselves.
    async fn count_for_category(&self, category_id: &str) -> Result<i64>;

    /// Distinct dates carrying at least one log in the category, newest
    /// first. Input for streak computation.
    async fn dates_for_category(&self, category_id: &str) -> Result<Vec<NaiveDate>>;
}
