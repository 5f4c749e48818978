//! Analytics service - derived views over activity logs and goals
//!
//! Reads through the activity and goal ports and folds logs into daily and
//! range summaries, goal progress, and streaks. Nothing computed here is
//! ever written back to the store.

use std::sync::Arc;

use chrono::NaiveDate;
use dayscore_domain::{
    ActivityLog, DailyGoal, DailySummary, DayscoreError, GoalProgress, GoalTarget, RangeSummary,
    RangeTotals, Result,
};
use tracing::debug;

use crate::activities::ports::ActivityRepository;
use crate::goals::ports::GoalRepository;
use crate::scoring;

/// Analytics service
pub struct AnalyticsService {
    activities: Arc<dyn ActivityRepository>,
    goals: Arc<dyn GoalRepository>,
}

impl AnalyticsService {
    /// Create a new analytics service.
    pub fn new(activities: Arc<dyn ActivityRepository>, goals: Arc<dyn GoalRepository>) -> Self {
        Self { activities, goals }
    }

    /// Aggregate one day's logs into totals and sparse breakdown maps.
    ///
    /// A day without logs yields an all-zero summary with empty maps;
    /// categories and energy levels never appear with zero values.
    pub async fn daily_summary(&self, date: NaiveDate) -> Result<DailySummary> {
        let logs = self.activities.list_by_date(date).await?;
        Ok(summarize_day(date, &logs))
    }

    /// One summary per day of the inclusive range, plus aggregate totals.
    ///
    /// Fails with `InvalidRange` when `end` precedes `start`. A
    /// single-day range (`start == end`) is valid and covers that day.
    pub async fn range_summary(&self, start: NaiveDate, end: NaiveDate) -> Result<RangeSummary> {
        if end < start {
            return Err(DayscoreError::InvalidRange(format!(
                "range end {end} precedes start {start}"
            )));
        }

        let mut days = Vec::new();
        let mut current = start;
        while current <= end {
            days.push(self.daily_summary(current).await?);
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }

        let totals = fold_range_totals(&days);
        debug!(%start, %end, days = days.len(), "range summary computed");
        Ok(RangeSummary { days, totals })
    }

    /// Evaluate every goal stored for `date` against that day's summary.
    ///
    /// Returns one entry per goal, empty when the day has no goals. The
    /// day's summary is computed once and shared across all goals.
    pub async fn goal_progress(&self, date: NaiveDate) -> Result<Vec<GoalProgress>> {
        let goals = self.goals.list_by_date(date).await?;
        if goals.is_empty() {
            return Ok(Vec::new());
        }

        let summary = self.daily_summary(date).await?;
        Ok(goals.into_iter().map(|goal| evaluate_goal(goal, &summary)).collect())
    }

    /// Consecutive days ending at `as_of` with at least one log in the
    /// category. Zero when `as_of` itself has no matching log. Dates after
    /// `as_of` are ignored.
    pub async fn streak(&self, category_id: &str, as_of: NaiveDate) -> Result<u32> {
        let dates = self.activities.dates_for_category(category_id).await?;
        Ok(consecutive_days(&dates, as_of))
    }
}

fn summarize_day(date: NaiveDate, logs: &[ActivityLog]) -> DailySummary {
    let mut summary = DailySummary::empty(date);
    for log in logs {
        let hours = scoring::hours_from_ms(log.duration_ms);
        summary.total_points += log.points;
        summary.total_hours += hours;

        let totals = summary.by_category.entry(log.category_id.clone()).or_default();
        totals.hours += hours;
        totals.points += log.points;

        *summary.by_energy_level.entry(log.energy_level).or_default() += hours;
    }
    summary
}

fn fold_range_totals(days: &[DailySummary]) -> RangeTotals {
    let mut totals = RangeTotals::default();
    for day in days {
        totals.total_points += day.total_points;
        totals.total_hours += day.total_hours;
        for (category_id, day_totals) in &day.by_category {
            let merged = totals.by_category.entry(category_id.clone()).or_default();
            merged.hours += day_totals.hours;
            merged.points += day_totals.points;
        }
    }
    totals
}

fn evaluate_goal(goal: DailyGoal, summary: &DailySummary) -> GoalProgress {
    let (value, target) = match &goal.target {
        GoalTarget::MinPoints { points } => (summary.total_points, *points),
        GoalTarget::MinHours { hours, category_ids } => {
            let value = if category_ids.is_empty() {
                summary.total_hours
            } else {
                category_ids
                    .iter()
                    .filter_map(|id| summary.by_category.get(id))
                    .map(|totals| totals.hours)
                    .sum()
            };
            (value, *hours)
        }
    };

    // A non-positive target is trivially met and must not divide.
    let (achieved, ratio) =
        if target <= 0.0 { (true, 1.0) } else { (value >= target, (value / target).max(0.0)) };

    GoalProgress { goal, achieved, ratio }
}

/// Count consecutive days walking backward from `as_of` through a list of
/// distinct dates sorted newest first.
fn consecutive_days(dates: &[NaiveDate], as_of: NaiveDate) -> u32 {
    let mut expected = as_of;
    let mut count = 0;
    for &date in dates {
        if date > as_of {
            continue;
        }
        if date != expected {
            break;
        }
        count += 1;
        match expected.pred_opt() {
            Some(previous) => expected = previous,
            None => break,
        }
    }
    count
}
