//! Port interfaces for task persistence

use async_trait::async_trait;
use chrono::NaiveDate;
use dayscore_domain::{Result, Task};

/// Persistence boundary for tasks
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetch a task by id.
    async fn get(&self, id: &str) -> Result<Option<Task>>;

    /// Insert or replace a task (last write wins).
    async fn put(&self, task: Task) -> Result<()>;

    /// Delete a task by id. Deleting an absent id is a no-op.
    async fn delete(&self, id: &str) -> Result<()>;

    /// List all tasks.
    async fn list(&self) -> Result<Vec<Task>>;

    /// All tasks attached to `date`.
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Task>>;
}
