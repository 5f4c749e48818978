//! Task repository implementation using SQLite
//!
//! The linked activity id column is nullable and stored verbatim; nothing
//! here checks that the referenced log still exists.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use dayscore_core::tasks::ports::TaskRepository;
use dayscore_domain::{DayscoreError, Result as DomainResult, Task};
use rusqlite::types::Type;
use rusqlite::{params, Row};
use tokio::task;

use super::manager::DbManager;
use crate::errors::map_sqlite_error;

/// SQLite-backed implementation of `TaskRepository`
pub struct SqliteTaskRepository {
    db: Arc<DbManager>,
}

impl SqliteTaskRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn get(&self, id: &str) -> DomainResult<Option<Task>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Task>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                "SELECT id, description, linked_activity_id, completed, date
                 FROM tasks WHERE id = ?1",
                params![&id],
                map_task_row,
            );

            match result {
                Ok(task) => Ok(Some(task)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sqlite_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn put(&self, task: Task) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT OR REPLACE INTO tasks
                 (id, description, linked_activity_id, completed, date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    &task.id,
                    &task.description,
                    &task.linked_activity_id,
                    bool_to_int(task.completed),
                    task.date.to_string(),
                ],
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
            conn.execute("DELETE FROM tasks WHERE id = ?1", params![&id])
                .map_err(map_sqlite_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Task>> {
            let conn = db.get_connection()?;

            let mut stmt = conn
                .prepare(
                    "SELECT id, description, linked_activity_id, completed, date
                     FROM tasks ORDER BY date ASC, id ASC",
                )
                .map_err(map_sqlite_error)?;
            let rows = stmt.query_map(params![], map_task_row).map_err(map_sqlite_error)?;

            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sqlite_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_by_date(&self, date: NaiveDate) -> DomainResult<Vec<Task>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Task>> {
            let conn = db.get_connection()?;

            let mut stmt = conn
                .prepare(
                    "SELECT id, description, linked_activity_id, completed, date
                     FROM tasks WHERE date = ?1 ORDER BY id ASC",
                )
                .map_err(map_sqlite_error)?;
            let rows = stmt
                .query_map(params![date.to_string()], map_task_row)
                .map_err(map_sqlite_error)?;

            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sqlite_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Map a row to a Task
fn map_task_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        linked_activity_id: row.get(2)?,
        completed: int_to_bool(row.get(3)?),
        date: date_from_text(4, row.get(4)?)?,
    })
}

fn date_from_text(idx: usize, text: String) -> rusqlite::Result<NaiveDate> {
    text.parse().map_err(|err: chrono::ParseError| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
    })
}

/// Convert bool to integer for SQLite
fn bool_to_int(value: bool) -> i32 {
    i32::from(value)
}

/// Convert integer to bool from SQLite
fn int_to_bool(value: i32) -> bool {
    value != 0
}

fn map_join_error(err: task::JoinError) -> DayscoreError {
    DayscoreError::Internal(format!("task join error: {err}"))
}
