//! Task service - core business logic

use std::sync::Arc;

use chrono::NaiveDate;
use dayscore_domain::{DayscoreError, Result, Task};
use tracing::debug;

use super::ports::TaskRepository;

/// Task service
///
/// Tasks are deliberately loose: `linked_activity_id` is stored opaquely
/// and never checked against the activity collection, so links may dangle
/// after an activity is deleted.
pub struct TaskService {
    tasks: Arc<dyn TaskRepository>,
}

impl TaskService {
    /// Create a new task service.
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    /// Create a task.
    pub async fn add(&self, task: Task) -> Result<Task> {
        validate_description(&task)?;
        self.tasks.put(task.clone()).await?;
        debug!(task_id = %task.id, date = %task.date, "task created");
        Ok(task)
    }

    /// Overwrite a task (last write wins).
    pub async fn update(&self, task: Task) -> Result<Task> {
        validate_description(&task)?;
        self.tasks.put(task.clone()).await?;
        debug!(task_id = %task.id, completed = task.completed, "task updated");
        Ok(task)
    }

    /// Delete a task. Deleting an absent id is a no-op.
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.tasks.delete(id).await?;
        debug!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Fetch a task by id.
    pub async fn get(&self, id: &str) -> Result<Option<Task>> {
        self.tasks.get(id).await
    }

    /// List all tasks.
    pub async fn list(&self) -> Result<Vec<Task>> {
        self.tasks.list().await
    }

    /// List the tasks attached to a day.
    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Task>> {
        self.tasks.list_by_date(date).await
    }
}

fn validate_description(task: &Task) -> Result<()> {
    if task.description.trim().is_empty() {
        return Err(DayscoreError::InvalidInput("task description must not be empty".into()));
    }
    Ok(())
}
