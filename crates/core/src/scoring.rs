//! Scoring engine - pure time-to-points derivation
//!
//! Every derived field on an [`ActivityLog`] flows through [`materialize`],
//! so the write path and any recomputation share a single formula. Nothing
//! here performs I/O.

use chrono::{DateTime, Local, NaiveDate, Utc};
use dayscore_domain::constants::MS_PER_HOUR;
use dayscore_domain::{ActivityDraft, ActivityLog};

/// Milliseconds between two instants.
pub fn duration_ms(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    end.signed_duration_since(start).num_milliseconds()
}

/// Fractional hours between two instants.
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    duration_ms(start, end) as f64 / MS_PER_HOUR
}

/// Fractional hours represented by a millisecond duration.
pub fn hours_from_ms(ms: i64) -> f64 {
    ms as f64 / MS_PER_HOUR
}

/// Points earned over a span at the given per-hour weight.
///
/// Linear in the span length: doubling the duration doubles the points for
/// a fixed weight.
pub fn score(start: DateTime<Utc>, end: DateTime<Utc>, points_per_hour: f64) -> f64 {
    hours_between(start, end) * points_per_hour
}

/// Calendar day of an instant in local time.
///
/// Activities group under the local day they were started, matching how a
/// person thinks about "today" regardless of UTC offset.
pub fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

/// Stamp derived fields onto a draft using the category weight in force now.
///
/// The returned log carries a points snapshot; later edits to the category
/// weight leave it untouched.
pub fn materialize(draft: ActivityDraft, points_per_hour: f64) -> ActivityLog {
    let duration = duration_ms(draft.start_time, draft.end_time);
    let date = local_date(draft.start_time);
    ActivityLog {
        id: draft.id,
        name: draft.name,
        category_id: draft.category_id,
        start_time: draft.start_time,
        end_time: draft.end_time,
        duration_ms: duration,
        points: hours_from_ms(duration) * points_per_hour,
        energy_level: draft.energy_level,
        date,
    }
}
