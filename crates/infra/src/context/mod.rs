//! Application context - dependency injection container

use std::fs;
use std::path::Path;
use std::sync::Arc;

use dayscore_core::activities::ports::ActivityRepository as ActivityRepositoryPort;
use dayscore_core::categories::ports::CategoryRepository as CategoryRepositoryPort;
use dayscore_core::goals::ports::GoalRepository as GoalRepositoryPort;
use dayscore_core::tasks::ports::TaskRepository as TaskRepositoryPort;
use dayscore_core::{ActivityService, AnalyticsService, CategoryService, GoalService, TaskService};
use dayscore_domain::{Config, DayscoreError, Result};
use tracing::info;

use crate::database::{
    DbManager, SqliteActivityRepository, SqliteCategoryRepository, SqliteGoalRepository,
    SqliteTaskRepository,
};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub categories: Arc<CategoryService>,
    pub activities: Arc<ActivityService>,
    pub tasks: Arc<TaskService>,
    pub goals: Arc<GoalService>,
    pub analytics: Arc<AnalyticsService>,
}

impl AppContext {
    /// Create a context from configuration discovered in the environment.
    pub fn new() -> Result<Self> {
        Self::new_with_config(crate::config::load()?)
    }

    /// Create a context with explicit configuration.
    ///
    /// Tests use this to point each context at its own database file and
    /// avoid conflicts with any production database.
    pub fn new_with_config(config: Config) -> Result<Self> {
        ensure_database_directory(&config.database.path)?;

        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let category_repo: Arc<dyn CategoryRepositoryPort> =
            Arc::new(SqliteCategoryRepository::new(db.clone()));
        let activity_repo: Arc<dyn ActivityRepositoryPort> =
            Arc::new(SqliteActivityRepository::new(db.clone()));
        let task_repo: Arc<dyn TaskRepositoryPort> = Arc::new(SqliteTaskRepository::new(db.clone()));
        let goal_repo: Arc<dyn GoalRepositoryPort> = Arc::new(SqliteGoalRepository::new(db.clone()));

        let categories =
            Arc::new(CategoryService::new(category_repo.clone(), activity_repo.clone()));
        let activities =
            Arc::new(ActivityService::new(activity_repo.clone(), category_repo.clone()));
        let tasks = Arc::new(TaskService::new(task_repo));
        let goals = Arc::new(GoalService::new(goal_repo.clone()));
        let analytics = Arc::new(AnalyticsService::new(activity_repo, goal_repo));

        info!(db_path = %config.database.path, "application context initialised");

        Ok(Self { config, db, categories, activities, tasks, goals, analytics })
    }
}

/// Create the parent directory of the database file if it does not exist yet
fn ensure_database_directory(db_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                DayscoreError::Internal(format!(
                    "failed to create database directory {}: {}",
                    parent.display(),
                    err
                ))
            })?;
        }
    }
    Ok(())
}
