//! End-to-end database integration coverage for the SQLite repositories.
//!
//! These tests exercise full workflows through the application context and
//! real repositories to ensure serialization, migrations, and the service
//! rules stay aligned. Each test runs against an isolated database file with
//! migrations applied.

use std::sync::Arc;

use chrono::{DateTime, Duration as ChronoDuration, Local, TimeZone, Utc};
use dayscore_core::categories::ports::CategoryRepository;
use dayscore_domain::{
    ActivityCategory, ActivityDraft, Config, DailyGoal, DatabaseConfig, DayscoreError, EnergyLevel,
    GoalTarget, LoggingConfig, Task,
};
use dayscore_infra::database::{DbManager, SqliteCategoryRepository};
use dayscore_infra::AppContext;
use tempfile::TempDir;

struct ContextHarness {
    #[allow(dead_code)]
    temp_dir: TempDir,
    ctx: AppContext,
}

impl ContextHarness {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("temporary directory should be created");
        // A nested path proves the context creates missing directories.
        let db_path = temp_dir.path().join("data").join("dayscore.db");

        let config = Config {
            database: DatabaseConfig {
                path: db_path.to_string_lossy().into_owned(),
                pool_size: 4,
            },
            logging: LoggingConfig::default(),
        };
        let ctx = AppContext::new_with_config(config).expect("application context should initialise");

        Self { temp_dir, ctx }
    }
}

/// Noon in local time keeps a block inside one calendar day in any timezone.
fn local_noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("local noon should be unambiguous")
        .with_timezone(&Utc)
}

fn block(category_id: &str, start: DateTime<Utc>, minutes: i64) -> ActivityDraft {
    ActivityDraft::new(
        "Logged block",
        category_id,
        start,
        start + ChronoDuration::minutes(minutes),
        EnergyLevel::Medium,
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn context_serves_a_full_day_workflow() {
    let harness = ContextHarness::new();
    let ctx = &harness.ctx;

    ctx.db.health_check().expect("database should answer a health check");

    let deep_work = ctx
        .categories
        .add(ActivityCategory::new("Deep Work", 10.0, "#4f9dff", "Focused work"))
        .await
        .expect("category should be created");

    let start = local_noon(2024, 3, 10);
    let log = ctx
        .activities
        .add(block(&deep_work.id, start, 90))
        .await
        .expect("activity should be logged");
    assert_eq!(log.duration_ms, 5_400_000);
    assert!((log.points - 15.0).abs() < 1e-9);
    assert_eq!(log.date, start.with_timezone(&Local).date_naive());

    let mut task = Task::new("Write the weekly review", log.date);
    task.linked_activity_id = Some(log.id.clone());
    ctx.tasks.add(task.clone()).await.expect("task should be created");

    ctx.goals
        .add(DailyGoal::new(log.date, GoalTarget::MinPoints { points: 10.0 }))
        .await
        .expect("goal should be created");

    let summary = ctx.analytics.daily_summary(log.date).await.expect("summary should compute");
    assert!((summary.total_points - 15.0).abs() < 1e-9);
    assert!((summary.total_hours - 1.5).abs() < 1e-9);
    let bucket = summary.by_category.get(&deep_work.id).expect("category bucket should exist");
    assert!((bucket.hours - 1.5).abs() < 1e-9);

    let progress = ctx.analytics.goal_progress(log.date).await.expect("progress should compute");
    assert_eq!(progress.len(), 1);
    assert!(progress[0].achieved);
    assert!((progress[0].ratio - 1.5).abs() < 1e-9);

    let day_tasks = ctx.tasks.list_by_date(log.date).await.expect("tasks should list");
    assert_eq!(day_tasks.len(), 1);
    assert_eq!(day_tasks[0].linked_activity_id.as_deref(), Some(log.id.as_str()));
}

#[tokio::test(flavor = "multi_thread")]
async fn stored_points_survive_category_weight_edits() {
    let harness = ContextHarness::new();
    let ctx = &harness.ctx;

    let mut category = ctx
        .categories
        .add(ActivityCategory::new("Deep Work", 10.0, "#4f9dff", "Focused work"))
        .await
        .expect("category should be created");

    let log = ctx
        .activities
        .add(block(&category.id, local_noon(2024, 3, 10), 120))
        .await
        .expect("activity should be logged");
    assert!((log.points - 20.0).abs() < 1e-9);

    category.points = 100.0;
    ctx.categories.update(category.clone()).await.expect("category should update");

    let reloaded = ctx
        .activities
        .get(&log.id)
        .await
        .expect("activity should load")
        .expect("activity should still exist");
    assert!((reloaded.points - 20.0).abs() < 1e-9);

    let fresh = ctx
        .activities
        .add(block(&category.id, local_noon(2024, 3, 11), 60))
        .await
        .expect("second activity should be logged");
    assert!((fresh.points - 100.0).abs() < 1e-9);
}

#[tokio::test(flavor = "multi_thread")]
async fn category_removal_waits_for_referencing_logs() {
    let harness = ContextHarness::new();
    let ctx = &harness.ctx;

    let category = ctx
        .categories
        .add(ActivityCategory::new("Chores", 2.0, "#cccc44", "Household chores"))
        .await
        .expect("category should be created");
    let log = ctx
        .activities
        .add(block(&category.id, local_noon(2024, 3, 10), 30))
        .await
        .expect("activity should be logged");

    let blocked = ctx.categories.remove(&category.id).await;
    assert!(matches!(blocked, Err(DayscoreError::CategoryInUse(_))));

    ctx.activities.remove(&log.id).await.expect("activity should delete");
    ctx.categories.remove(&category.id).await.expect("category should delete once unreferenced");
    assert!(ctx.categories.get(&category.id).await.expect("get should succeed").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_names_are_rejected_against_stored_rows() {
    let harness = ContextHarness::new();
    let ctx = &harness.ctx;

    ctx.categories
        .add(ActivityCategory::new("Deep Work", 10.0, "#4f9dff", "Focused work"))
        .await
        .expect("first category should be created");

    let duplicate = ctx
        .categories
        .add(ActivityCategory::new("deep work", 4.0, "#224466", "Lowercase twin"))
        .await;
    assert!(matches!(duplicate, Err(DayscoreError::DuplicateName(_))));

    let invalid_reference = ctx
        .activities
        .add(block("missing-category", local_noon(2024, 3, 10), 30))
        .await;
    assert!(matches!(invalid_reference, Err(DayscoreError::InvalidReference(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn analytics_walk_days_stored_on_disk() {
    let harness = ContextHarness::new();
    let ctx = &harness.ctx;

    let deep_work = ctx
        .categories
        .add(ActivityCategory::new("Deep Work", 10.0, "#4f9dff", "Focused work"))
        .await
        .expect("category should be created");

    for day in [8, 9, 10] {
        ctx.activities
            .add(block(&deep_work.id, local_noon(2024, 3, day), 60))
            .await
            .expect("activity should be logged");
    }

    let d = |day| local_noon(2024, 3, day).with_timezone(&Local).date_naive();

    let range = ctx.analytics.range_summary(d(8), d(11)).await.expect("range should compute");
    assert_eq!(range.days.len(), 4);
    assert_eq!(range.days[0].date, d(8));
    assert_eq!(range.days[3].date, d(11));
    assert!((range.totals.total_hours - 3.0).abs() < 1e-9);
    assert!((range.totals.total_points - 30.0).abs() < 1e-9);
    assert!(range.days[3].by_category.is_empty());

    let inverted = ctx.analytics.range_summary(d(11), d(8)).await;
    assert!(matches!(inverted, Err(DayscoreError::InvalidRange(_))));

    assert_eq!(ctx.analytics.streak(&deep_work.id, d(10)).await.expect("streak"), 3);
    assert_eq!(ctx.analytics.streak(&deep_work.id, d(11)).await.expect("streak"), 0);
    assert_eq!(ctx.analytics.streak("unknown-category", d(10)).await.expect("streak"), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn data_survives_reopening_the_database() {
    let temp_dir = TempDir::new().expect("temporary directory should be created");
    let db_path = temp_dir.path().join("dayscore.db");
    let category = ActivityCategory::new("Deep Work", 10.0, "#4f9dff", "Focused work");

    {
        let manager =
            Arc::new(DbManager::new(&db_path, 2).expect("database manager should initialise"));
        manager.run_migrations().expect("schema migrations should apply");
        let repo = SqliteCategoryRepository::new(Arc::clone(&manager));
        repo.put(category.clone()).await.expect("category should persist");
    }

    let manager =
        Arc::new(DbManager::new(&db_path, 2).expect("database manager should reopen the file"));
    manager.run_migrations().expect("re-running migrations should be harmless");
    let repo = SqliteCategoryRepository::new(manager);

    let retrieved = repo.get(&category.id).await.expect("category should load");
    assert_eq!(retrieved, Some(category));
}
