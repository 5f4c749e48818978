//! Activity service - core business logic
//!
//! The single write path for activity logs. Drafts are validated, the
//! category weight is read once, and the scoring engine stamps the derived
//! fields before anything reaches the store.

use std::sync::Arc;

use chrono::NaiveDate;
use dayscore_domain::{ActivityDraft, ActivityLog, DayscoreError, Result};
use tracing::{debug, info};

use super::ports::ActivityRepository;
use crate::categories::ports::CategoryRepository;
use crate::scoring;

/// Activity service materializing drafts into scored logs
pub struct ActivityService {
    activities: Arc<dyn ActivityRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ActivityService {
    /// Create a new activity service.
    pub fn new(
        activities: Arc<dyn ActivityRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self { activities, categories }
    }

    /// Validate a draft and persist the materialized log.
    ///
    /// The persisted points are a snapshot of the category weight at this
    /// moment; later category edits never rewrite existing logs.
    pub async fn add(&self, draft: ActivityDraft) -> Result<ActivityLog> {
        let log = self.materialize_checked(draft).await?;
        self.activities.put(log.clone()).await?;
        info!(
            activity_id = %log.id,
            category_id = %log.category_id,
            date = %log.date,
            points = log.points,
            "activity logged"
        );
        Ok(log)
    }

    /// Re-validate a draft and overwrite the stored log (last write wins).
    ///
    /// Derived fields are recomputed from the draft in the same atomic
    /// step, so duration, points, and date can never skew from the new
    /// time range or category.
    pub async fn update(&self, draft: ActivityDraft) -> Result<ActivityLog> {
        let log = self.materialize_checked(draft).await?;
        self.activities.put(log.clone()).await?;
        info!(activity_id = %log.id, date = %log.date, "activity updated");
        Ok(log)
    }

    /// Delete a log. Deleting an absent id is a no-op.
    ///
    /// Tasks linking to the log keep their opaque reference; a dangling
    /// link is not an error anywhere in the system.
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.activities.delete(id).await?;
        debug!(activity_id = %id, "activity deleted");
        Ok(())
    }

    /// Fetch a log by id.
    pub async fn get(&self, id: &str) -> Result<Option<ActivityLog>> {
        self.activities.get(id).await
    }

    /// List all logs.
    pub async fn list(&self) -> Result<Vec<ActivityLog>> {
        self.activities.list().await
    }

    /// List the logs of a single day.
    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<ActivityLog>> {
        self.activities.list_by_date(date).await
    }

    async fn materialize_checked(&self, draft: ActivityDraft) -> Result<ActivityLog> {
        if draft.name.trim().is_empty() {
            return Err(DayscoreError::InvalidInput("activity name must not be empty".into()));
        }
        if draft.end_time <= draft.start_time {
            return Err(DayscoreError::InvalidTimeRange(format!(
                "end time {} must be after start time {}",
                draft.end_time, draft.start_time
            )));
        }
        let category = self.categories.get(&draft.category_id).await?.ok_or_else(|| {
            DayscoreError::InvalidReference(format!(
                "category {} does not exist",
                draft.category_id
            ))
        })?;
        Ok(scoring::materialize(draft, category.points))
    }
}
