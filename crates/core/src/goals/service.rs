//! Goal service - core business logic
//!
//! Stores goal definitions only. Progress is derived on read by the
//! analytics service and never persisted, so edits to past activity are
//! reflected the next time progress is asked for.

use std::sync::Arc;

use chrono::NaiveDate;
use dayscore_domain::{DailyGoal, DayscoreError, Result};
use tracing::debug;

use super::ports::GoalRepository;

/// Goal service
pub struct GoalService {
    goals: Arc<dyn GoalRepository>,
}

impl GoalService {
    /// Create a new goal service.
    pub fn new(goals: Arc<dyn GoalRepository>) -> Self {
        Self { goals }
    }

    /// Create a goal.
    pub async fn add(&self, goal: DailyGoal) -> Result<DailyGoal> {
        validate_target(&goal)?;
        self.goals.put(goal.clone()).await?;
        debug!(goal_id = %goal.id, date = %goal.date, "goal created");
        Ok(goal)
    }

    /// Overwrite a goal (last write wins).
    pub async fn update(&self, goal: DailyGoal) -> Result<DailyGoal> {
        validate_target(&goal)?;
        self.goals.put(goal.clone()).await?;
        debug!(goal_id = %goal.id, "goal updated");
        Ok(goal)
    }

    /// Delete a goal. Deleting an absent id is a no-op.
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.goals.delete(id).await?;
        debug!(goal_id = %id, "goal deleted");
        Ok(())
    }

    /// Fetch a goal by id.
    pub async fn get(&self, id: &str) -> Result<Option<DailyGoal>> {
        self.goals.get(id).await
    }

    /// List all goals.
    pub async fn list(&self) -> Result<Vec<DailyGoal>> {
        self.goals.list().await
    }

    /// List the goals attached to a day.
    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<DailyGoal>> {
        self.goals.list_by_date(date).await
    }
}

fn validate_target(goal: &DailyGoal) -> Result<()> {
    let magnitude = goal.target.magnitude();
    if !magnitude.is_finite() || magnitude < 0.0 {
        return Err(DayscoreError::InvalidInput(format!(
            "goal target must be a non-negative finite number, got {magnitude}"
        )));
    }
    Ok(())
}
