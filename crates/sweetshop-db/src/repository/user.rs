//! # User Repository
//!
//! Database operations for accounts. Accounts are created once at
//! registration and read-only afterwards, so the surface is deliberately
//! small: insert and lookup by email.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use sweetshop_core::User;

/// Repository for account database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Inserts a new account.
    ///
    /// The email column carries a UNIQUE constraint; a duplicate surfaces as
    /// `DbError::UniqueViolation` (the service checks first, this is the
    /// backstop for two registrations racing).
    pub async fn insert(&self, email: &str, password_hash: &str) -> DbResult<User> {
        debug!(email = %email, "Inserting user");

        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Looks up an account by email. `None` if no such account.
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find_by_email() {
        let db = test_db().await;
        let repo = db.users();

        let created = repo.insert("user@example.com", "hash123").await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.email, "user@example.com");
        assert_eq!(created.password_hash, "hash123");

        let found = repo.find_by_email("user@example.com").await.unwrap().unwrap();
        assert_eq!(found, created);

        assert!(repo.find_by_email("other@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let db = test_db().await;
        let repo = db.users();

        repo.insert("user@example.com", "hash1").await.unwrap();
        let err = repo.insert("user@example.com", "hash2").await.unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }
}
