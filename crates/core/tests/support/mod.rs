//! Shared fixtures for core integration tests.

pub mod repositories;

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use dayscore_domain::{ActivityCategory, ActivityDraft, EnergyLevel};

/// Mid-day local instant on the given date, expressed in UTC.
///
/// Derived dates use local time; anchoring fixtures at noon keeps them on
/// the intended calendar day in whatever timezone the suite runs under.
pub fn local_noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid local timestamp")
        .with_timezone(&Utc)
}

/// Category fixture with a stable color and description.
pub fn make_category(name: &str, points: f64) -> ActivityCategory {
    ActivityCategory::new(name, points, "#4f9dff", format!("Custom category: {name}"))
}

/// Draft fixture spanning `minutes` from `start` at medium energy.
pub fn make_draft(
    name: &str,
    category_id: &str,
    start: DateTime<Utc>,
    minutes: i64,
) -> ActivityDraft {
    ActivityDraft::new(
        name,
        category_id,
        start,
        start + Duration::minutes(minutes),
        EnergyLevel::Medium,
    )
}
