//! Activity log repository implementation using SQLite
//!
//! Timestamps are stored as epoch milliseconds and the derived date as
//! ISO-8601 text, so the date index sorts chronologically.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use dayscore_core::activities::ports::ActivityRepository;
use dayscore_domain::{ActivityLog, DayscoreError, EnergyLevel, Result as DomainResult};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row, ToSql};
use tokio::task;

use super::manager::DbManager;
use crate::errors::map_sqlite_error;

const LOG_BY_ID_QUERY: &str = "SELECT id, name, category_id, start_time, end_time, duration_ms, points, energy_level, date
     FROM activity_logs WHERE id = ?1";

const ALL_LOGS_QUERY: &str = "SELECT id, name, category_id, start_time, end_time, duration_ms, points, energy_level, date
     FROM activity_logs ORDER BY start_time ASC";

const LOGS_BY_DATE_QUERY: &str = "SELECT id, name, category_id, start_time, end_time, duration_ms, points, energy_level, date
     FROM activity_logs WHERE date = ?1 ORDER BY start_time ASC";

/// SQLite-backed implementation of `ActivityRepository`
pub struct SqliteActivityRepository {
    db: Arc<DbManager>,
}

impl SqliteActivityRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivityRepository for SqliteActivityRepository {
    async fn get(&self, id: &str) -> DomainResult<Option<ActivityLog>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<ActivityLog>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(LOG_BY_ID_QUERY, params![&id], map_log_row);

            match result {
                Ok(log) => Ok(Some(log)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sqlite_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn put(&self, log: ActivityLog) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT OR REPLACE INTO activity_logs
                 (id, name, category_id, start_time, end_time, duration_ms, points, energy_level, date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    &log.id,
                    &log.name,
                    &log.category_id,
                    log.start_time.timestamp_millis(),
                    log.end_time.timestamp_millis(),
                    log.duration_ms,
                    log.points,
                    log.energy_level.to_string(),
                    log.date.to_string(),
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
            conn.execute("DELETE FROM activity_logs WHERE id = ?1", params![&id])
                .map_err(map_sqlite_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list(&self) -> DomainResult<Vec<ActivityLog>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<ActivityLog>> {
            let conn = db.get_connection()?;
            query_logs(&conn, ALL_LOGS_QUERY, &[])
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_by_date(&self, date: NaiveDate) -> DomainResult<Vec<ActivityLog>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<ActivityLog>> {
            let conn = db.get_connection()?;
            let date_text = date.to_string();
            query_logs(&conn, LOGS_BY_DATE_QUERY, &[&date_text])
        })
        .await
        .map_err(map_join_error)?
    }

    async fn count_for_category(&self, category_id: &str) -> DomainResult<i64> {
        let db = Arc::clone(&self.db);
        let category_id = category_id.to_string();

        task::spawn_blocking(move || -> DomainResult<i64> {
            let conn = db.get_connection()?;
            conn.query_row(
                "SELECT COUNT(*) FROM activity_logs WHERE category_id = ?1",
                params![&category_id],
                |row| row.get(0),
            )
            .map_err(map_sqlite_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn dates_for_category(&self, category_id: &str) -> DomainResult<Vec<NaiveDate>> {
        let db = Arc::clone(&self.db);
        let category_id = category_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<NaiveDate>> {
            let conn = db.get_connection()?;

            // ISO-8601 text sorts chronologically, so DESC yields newest first.
            let mut stmt = conn
                .prepare(
                    "SELECT DISTINCT date FROM activity_logs
                     WHERE category_id = ?1 ORDER BY date DESC",
                )
                .map_err(map_sqlite_error)?;
            let rows = stmt
                .query_map(params![&category_id], |row| date_from_text(0, row.get(0)?))
                .map_err(map_sqlite_error)?;

            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sqlite_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Run a query expected to return activity log rows
fn query_logs(conn: &Connection, sql: &str, params: &[&dyn ToSql]) -> DomainResult<Vec<ActivityLog>> {
    let mut stmt = conn.prepare(sql).map_err(map_sqlite_error)?;
    let rows = stmt.query_map(params, map_log_row).map_err(map_sqlite_error)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sqlite_error)
}

/// Map a row to an ActivityLog
fn map_log_row(row: &Row) -> rusqlite::Result<ActivityLog> {
    Ok(ActivityLog {
        id: row.get(0)?,
        name: row.get(1)?,
        category_id: row.get(2)?,
        start_time: timestamp_from_millis(3, row.get(3)?)?,
        end_time: timestamp_from_millis(4, row.get(4)?)?,
        duration_ms: row.get(5)?,
        points: row.get(6)?,
        energy_level: energy_from_text(7, row.get(7)?)?,
        date: date_from_text(8, row.get(8)?)?,
    })
}

fn timestamp_from_millis(idx: usize, millis: i64) -> rusqlite::Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, millis))
}

fn date_from_text(idx: usize, text: String) -> rusqlite::Result<NaiveDate> {
    text.parse().map_err(|err: chrono::ParseError| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
    })
}

fn energy_from_text(idx: usize, text: String) -> rusqlite::Result<EnergyLevel> {
    text.parse::<EnergyLevel>()
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, err.into()))
}

fn map_join_error(err: task::JoinError) -> DayscoreError {
    DayscoreError::Internal(format!("task join error: {err}"))
}
