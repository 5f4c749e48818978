//! Activity category types

use serde::{Deserialize, Serialize};

use super::new_id;

/// User-defined activity category carrying a points-per-hour weight.
///
/// Names are unique case-insensitively across all categories. A category
/// referenced by at least one activity log cannot be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCategory {
    pub id: String,
    pub name: String,
    /// Points earned per hour logged against this category. May be negative
    /// for activities that should count against the day.
    pub points: f64,
    /// Display hint for the UI layer, stored verbatim.
    pub color: String,
    pub description: String,
}

impl ActivityCategory {
    /// Build a category with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        points: f64,
        color: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            points,
            color: color.into(),
            description: description.into(),
        }
    }
}
