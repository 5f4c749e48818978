//! Port interfaces for category persistence
//!
//! These traits define the boundary between core business logic and
//! infrastructure implementations.

use async_trait::async_trait;
use dayscore_domain::{ActivityCategory, Result};

/// Persistence boundary for activity categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fetch a category by id.
    async fn get(&self, id: &str) -> Result<Option<ActivityCategory>>;

    /// Insert or replace a category (last write wins).
    async fn put(&self, category: ActivityCategory) -> Result<()>;

    /// Delete a category by id. Deleting an absent id is a no-op.
    async fn delete(&self, id: &str) -> Result<()>;

    /// List all categories.
    async fn list(&self) -> Result<Vec<ActivityCategory>>;

    /// Find the category whose name matches case-insensitively, if any.
    async fn find_by_name(&self, name: &str) -> Result<Option<ActivityCategory>>;
}
