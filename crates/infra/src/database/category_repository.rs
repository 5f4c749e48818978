//! Category repository implementation using SQLite
//!
//! Provides persistence for activity categories.

use std::sync::Arc;

use async_trait::async_trait;
use dayscore_core::categories::ports::CategoryRepository;
use dayscore_domain::{ActivityCategory, DayscoreError, Result as DomainResult};
use rusqlite::{params, Row};
use tokio::task;

use super::manager::DbManager;
use crate::errors::map_sqlite_error;

/// SQLite-backed implementation of `CategoryRepository`
pub struct SqliteCategoryRepository {
    db: Arc<DbManager>,
}

impl SqliteCategoryRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn get(&self, id: &str) -> DomainResult<Option<ActivityCategory>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<ActivityCategory>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                "SELECT id, name, points, color, description
                 FROM activity_categories WHERE id = ?1",
                params![&id],
                map_category_row,
            );

            match result {
                Ok(category) => Ok(Some(category)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sqlite_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn put(&self, category: ActivityCategory) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            // An OR REPLACE upsert would resolve a collision on the unique
            // name index by deleting the other category's row. The explicit
            // id-conflict clause keeps a name collision an error.
            conn.execute(
                "INSERT INTO activity_categories (id, name, points, color, description)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    points = excluded.points,
                    color = excluded.color,
                    description = excluded.description",
                params![
                    &category.id,
                    &category.name,
                    category.points,
                    &category.color,
                    &category.description
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
            conn.execute("DELETE FROM activity_categories WHERE id = ?1", params![&id])
                .map_err(map_sqlite_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list(&self) -> DomainResult<Vec<ActivityCategory>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<ActivityCategory>> {
            let conn = db.get_connection()?;

            let mut stmt = conn
                .prepare(
                    "SELECT id, name, points, color, description
                     FROM activity_categories
                     ORDER BY name COLLATE NOCASE ASC",
                )
                .map_err(map_sqlite_error)?;
            let rows = stmt.query_map(params![], map_category_row).map_err(map_sqlite_error)?;

            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sqlite_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<ActivityCategory>> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<ActivityCategory>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                "SELECT id, name, points, color, description
                 FROM activity_categories WHERE name = ?1 COLLATE NOCASE",
                params![&name],
                map_category_row,
            );

            match result {
                Ok(category) => Ok(Some(category)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sqlite_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Map a row to an ActivityCategory
fn map_category_row(row: &Row) -> rusqlite::Result<ActivityCategory> {
    Ok(ActivityCategory {
        id: row.get(0)?,
        name: row.get(1)?,
        points: row.get(2)?,
        color: row.get(3)?,
        description: row.get(4)?,
    })
}

fn map_join_error(err: task::JoinError) -> DayscoreError {
    DayscoreError::Internal(format!("task join error: {err}"))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn setup_test_db() -> (Arc<DbManager>, TempDir) {
        let temp_dir = TempDir::new().expect("create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let manager = DbManager::new(&db_path, 5).expect("create db manager");
        manager.run_migrations().expect("run migrations");
        (Arc::new(manager), temp_dir)
    }

    fn make_category(name: &str, points: f64) -> ActivityCategory {
        ActivityCategory::new(name, points, "#22aa55", format!("{name} activities"))
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn put_and_get_round_trip() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteCategoryRepository::new(db);
        let category = make_category("Deep Work", 10.0);

        repo.put(category.clone()).await.expect("put category");

        let retrieved = repo.get(&category.id).await.expect("get category");
        assert_eq!(retrieved, Some(category));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn get_nonexistent_returns_none() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteCategoryRepository::new(db);

        let retrieved = repo.get("nonexistent").await.expect("get category");
        assert!(retrieved.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn put_overwrites_existing_row() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteCategoryRepository::new(db);
        let mut category = make_category("Deep Work", 10.0);

        repo.put(category.clone()).await.expect("put category");

        category.points = 12.5;
        category.color = "#ff8800".into();
        repo.put(category.clone()).await.expect("overwrite category");

        let retrieved = repo.get(&category.id).await.expect("get category").unwrap();
        assert_eq!(retrieved.points, 12.5);
        assert_eq!(retrieved.color, "#ff8800");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn name_index_rejects_case_variant_duplicates() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteCategoryRepository::new(db);

        repo.put(make_category("Deep Work", 10.0)).await.expect("put first");

        let result = repo.put(make_category("DEEP WORK", 5.0)).await;
        assert!(matches!(result, Err(DayscoreError::DuplicateName(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn find_by_name_ignores_case() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteCategoryRepository::new(db);
        let category = make_category("Deep Work", 10.0);
        repo.put(category.clone()).await.expect("put category");

        let found = repo.find_by_name("deep work").await.expect("find by name");
        assert_eq!(found.map(|c| c.id), Some(category.id));

        let missing = repo.find_by_name("Chores").await.expect("find by name");
        assert!(missing.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_orders_by_name() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteCategoryRepository::new(db);

        repo.put(make_category("chores", 1.0)).await.expect("put");
        repo.put(make_category("Admin", 2.0)).await.expect("put");
        repo.put(make_category("Deep Work", 10.0)).await.expect("put");

        let listed = repo.list().await.expect("list categories");
        let names: Vec<_> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Admin", "chores", "Deep Work"]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_is_idempotent() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteCategoryRepository::new(db);
        let category = make_category("Deep Work", 10.0);
        repo.put(category.clone()).await.expect("put category");

        repo.delete(&category.id).await.expect("delete category");
        assert!(repo.get(&category.id).await.expect("get category").is_none());

        repo.delete(&category.id).await.expect("repeat delete");
    }
}
