//! Conversions from SQLite errors into domain errors.

use dayscore_domain::DayscoreError;
use rusqlite::Error as SqlError;

/// Map a raw SQLite error onto the domain error taxonomy.
///
/// Constraint violations carry SQLite extended codes: 2067 is a unique
/// index violation, which in this schema can only be the case-insensitive
/// category name index, so it surfaces as a duplicate-name error rather
/// than a generic storage failure.
pub fn map_sqlite_error(error: SqlError) -> DayscoreError {
    use rusqlite::ffi::ErrorCode;

    match error {
        SqlError::SqliteFailure(err, maybe_message) => {
            let message = maybe_message.unwrap_or_default();
            match (err.code, err.extended_code) {
                (ErrorCode::DatabaseBusy, _) => DayscoreError::Storage("database is busy".into()),
                (ErrorCode::DatabaseLocked, _) => {
                    DayscoreError::Storage("database is locked".into())
                }
                (ErrorCode::ConstraintViolation, 2067) => DayscoreError::DuplicateName(
                    if message.is_empty() { "unique constraint violation".into() } else { message },
                ),
                (ErrorCode::ConstraintViolation, 787) => DayscoreError::InvalidReference(
                    "foreign key constraint violation".into(),
                ),
                (ErrorCode::CannotOpen, _) => DayscoreError::StorageUnavailable(format!(
                    "cannot open database file: {message}"
                )),
                (ErrorCode::NotADatabase, _) => {
                    DayscoreError::StorageUnavailable("file is not a database".into())
                }
                _ => DayscoreError::Storage(format!(
                    "sqlite failure {:?} (code {}): {}",
                    err.code, err.extended_code, message
                )),
            }
        }
        SqlError::QueryReturnedNoRows => {
            DayscoreError::NotFound("no rows returned by query".into())
        }
        SqlError::FromSqlConversionFailure(_, _, cause) => {
            DayscoreError::Storage(format!("failed to convert sqlite value: {cause}"))
        }
        SqlError::InvalidColumnType(_, _, ty) => {
            DayscoreError::Storage(format!("invalid column type: {ty}"))
        }
        SqlError::Utf8Error(_) => {
            DayscoreError::Storage("invalid UTF-8 returned from sqlite".into())
        }
        SqlError::InvalidParameterName(parameter_name) => {
            DayscoreError::Storage(format!("invalid parameter name: {parameter_name}"))
        }
        SqlError::InvalidPath(path) => DayscoreError::StorageUnavailable(format!(
            "invalid database path: {}",
            path.to_string_lossy()
        )),
        SqlError::InvalidQuery => DayscoreError::Storage("invalid SQL query".into()),
        other => DayscoreError::Storage(other.to_string()),
    }
}
