//! Task types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::new_id;

/// A to-do item attached to a calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    /// Optional association with an activity log. The id is stored opaquely
    /// and never validated; the referenced log may be deleted at any time
    /// and the link simply dangles.
    pub linked_activity_id: Option<String>,
    pub completed: bool,
    pub date: NaiveDate,
}

impl Task {
    /// Build an open, unlinked task with a freshly generated id.
    pub fn new(description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: new_id(),
            description: description.into(),
            linked_activity_id: None,
            completed: false,
            date,
        }
    }
}
