//! Daily goal repository implementation using SQLite
//!
//! Goal targets are stored as a JSON column so new target kinds do not
//! require a schema change.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use dayscore_core::goals::ports::GoalRepository;
use dayscore_domain::{DailyGoal, DayscoreError, GoalTarget, Result as DomainResult};
use rusqlite::types::Type;
use rusqlite::{params, Row};
use tokio::task;

use super::manager::DbManager;
use crate::errors::map_sqlite_error;

/// SQLite-backed implementation of `GoalRepository`
pub struct SqliteGoalRepository {
    db: Arc<DbManager>,
}

impl SqliteGoalRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GoalRepository for SqliteGoalRepository {
    async fn get(&self, id: &str) -> DomainResult<Option<DailyGoal>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<DailyGoal>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                "SELECT id, date, target FROM daily_goals WHERE id = ?1",
                params![&id],
                map_goal_row,
            );

            match result {
                Ok(goal) => Ok(Some(goal)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sqlite_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn put(&self, goal: DailyGoal) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let target_json = serde_json::to_string(&goal.target).map_err(|err| {
                DayscoreError::Storage(format!("failed to serialize goal target: {err}"))
            })?;

            let conn = db.get_connection()?;
            conn.execute(
                "INSERT OR REPLACE INTO daily_goals (id, date, target)
                 VALUES (?1, ?2, ?3)",
                params![&goal.id, goal.date.to_string(), &target_json],
            )
            .map_err(map_sqlite_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute("DELETE FROM daily_goals WHERE id = ?1", params![&id])
                .map_err(map_sqlite_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list(&self) -> DomainResult<Vec<DailyGoal>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<DailyGoal>> {
            let conn = db.get_connection()?;

            let mut stmt = conn
                .prepare("SELECT id, date, target FROM daily_goals ORDER BY date ASC, id ASC")
                .map_err(map_sqlite_error)?;
            let rows = stmt.query_map(params![], map_goal_row).map_err(map_sqlite_error)?;

            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sqlite_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_by_date(&self, date: NaiveDate) -> DomainResult<Vec<DailyGoal>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<DailyGoal>> {
            let conn = db.get_connection()?;

            let mut stmt = conn
                .prepare("SELECT id, date, target FROM daily_goals WHERE date = ?1 ORDER BY id ASC")
                .map_err(map_sqlite_error)?;
            let rows = stmt
                .query_map(params![date.to_string()], map_goal_row)
                .map_err(map_sqlite_error)?;

            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sqlite_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Map a row to a DailyGoal
fn map_goal_row(row: &Row) -> rusqlite::Result<DailyGoal> {
    Ok(DailyGoal {
        id: row.get(0)?,
        date: date_from_text(1, row.get(1)?)?,
        target: target_from_json(2, row.get(2)?)?,
    })
}

fn date_from_text(idx: usize, text: String) -> rusqlite::Result<NaiveDate> {
    text.parse().map_err(|err: chrono::ParseError| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
    })
}

fn target_from_json(idx: usize, text: String) -> rusqlite::Result<GoalTarget> {
    serde_json::from_str(&text)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

fn map_join_error(err: task::JoinError) -> DayscoreError {
    DayscoreError::Internal(format!("task join error: {err}"))
}
