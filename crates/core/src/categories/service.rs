//! Category service - core business logic
//!
//! Enforces name uniqueness on writes and the referential-integrity guard
//! on deletes. All checks run before any store mutation, so a failed call
//! leaves both collections untouched.

use std::sync::Arc;

use dayscore_domain::{ActivityCategory, DayscoreError, Result};
use tracing::{debug, info};

use super::ports::CategoryRepository;
use crate::activities::ports::ActivityRepository;

/// Category service enforcing uniqueness and delete guards
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    activities: Arc<dyn ActivityRepository>,
}

impl CategoryService {
    /// Create a new category service.
    ///
    /// The activity repository is consulted only for the in-use check on
    /// delete; this service never mutates activity logs.
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        activities: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self { categories, activities }
    }

    /// Create a category.
    ///
    /// Fails with `DuplicateName` when another category already holds the
    /// name, compared case-insensitively.
    pub async fn add(&self, category: ActivityCategory) -> Result<ActivityCategory> {
        self.ensure_name_free(&category).await?;
        self.categories.put(category.clone()).await?;
        info!(category_id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Overwrite a category (last write wins).
    ///
    /// The uniqueness check excludes the category itself, so renaming only
    /// the casing of a name is allowed.
    pub async fn update(&self, category: ActivityCategory) -> Result<ActivityCategory> {
        self.ensure_name_free(&category).await?;
        self.categories.put(category.clone()).await?;
        info!(category_id = %category.id, name = %category.name, "category updated");
        Ok(category)
    }

    /// Delete a category that no activity log references.
    ///
    /// Fails with `CategoryInUse` while references exist. Deleting an
    /// absent id succeeds without touching anything. The usage check and
    /// the delete are separate statements; an activity write landing in
    /// between is the accepted race of the single-writer model.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let in_use = self.activities.count_for_category(id).await?;
        if in_use > 0 {
            return Err(DayscoreError::CategoryInUse(format!(
                "category {id} is referenced by {in_use} activity log(s)"
            )));
        }
        self.categories.delete(id).await?;
        debug!(category_id = %id, "category deleted");
        Ok(())
    }

    /// Fetch a category by id.
    pub async fn get(&self, id: &str) -> Result<Option<ActivityCategory>> {
        self.categories.get(id).await
    }

    /// List all categories.
    pub async fn list(&self) -> Result<Vec<ActivityCategory>> {
        self.categories.list().await
    }

    async fn ensure_name_free(&self, candidate: &ActivityCategory) -> Result<()> {
        if candidate.name.trim().is_empty() {
            return Err(DayscoreError::InvalidInput("category name must not be empty".into()));
        }
        if let Some(existing) = self.categories.find_by_name(&candidate.name).await? {
            if existing.id != candidate.id {
                return Err(DayscoreError::DuplicateName(format!(
                    "category name '{}' is already taken",
                    candidate.name
                )));
            }
        }
        Ok(())
    }
}
