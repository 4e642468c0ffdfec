//! # Database Error Types
//!
//! ## Error Flow
//! ```text
//! SQLite error (sqlx::Error)
//!      │
//!      ▼
//! DbError (this module)  ←  adds categorization (unique violation, pool, ...)
//!      │
//!      ▼
//! ApiError (apps/api)    ←  mapped to a 500, or 400 for duplicate email
//! ```
//!
//! Row absence is NOT an error at this layer: repositories return
//! `Option::None` / `false` for it. `DbError` covers genuine storage faults,
//! which the service layer never retries or swallows.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Could not open the database or create the pool.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A migration failed to apply.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Unique constraint violation (duplicate users.email).
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// All pool connections are in use.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Any other query execution failure.
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl DbError {
    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Convenience type alias for Results with DbError.
pub type DbResult<T> = Result<T, DbError>;

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (unique)  → DbError::UniqueViolation
/// sqlx::Error::PoolTimedOut       → DbError::PoolExhausted
/// Other                           → DbError::QueryFailed
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    // SQLite reports "UNIQUE constraint failed: table.column"
                    let message = db_err.message().to_string();
                    let field = message
                        .rsplit('.')
                        .next()
                        .unwrap_or("value")
                        .to_string();
                    DbError::UniqueViolation {
                        field,
                        value: String::new(),
                    }
                } else {
                    DbError::QueryFailed(db_err.to_string())
                }
            }
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            other => DbError::QueryFailed(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::duplicate("email", "a@b.com");
        assert_eq!(err.to_string(), "Duplicate email: 'a@b.com' already exists");

        let err = DbError::QueryFailed("disk I/O error".to_string());
        assert_eq!(err.to_string(), "Query failed: disk I/O error");
    }
}
