//! # Sweet Repository
//!
//! Database operations for the inventory table.
//!
//! ## Stock Adjustments
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Quantity Update Strategy                           │
//! │                                                                     │
//! │  ❌ WRONG: read-modify-write in two statements                      │
//! │     SELECT quantity ... ; UPDATE sweets SET quantity = 7 ...        │
//! │     (two concurrent purchases both read 10 and both "succeed",      │
//! │      over-decrementing stock - a lost-update race)                  │
//! │                                                                     │
//! │  ✅ CORRECT: single conditional update                              │
//! │     UPDATE sweets SET quantity = quantity - ?                       │
//! │     WHERE id = ? AND quantity >= ?                                  │
//! │     (zero rows affected means missing row OR insufficient stock;    │
//! │      the service layer distinguishes the two)                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use sweetshop_core::{NewSweet, Sweet};

/// Repository for inventory database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.sweets();
/// let all = repo.list_all().await?;
/// let one = repo.get_by_id(3).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SweetRepository {
    pool: SqlitePool,
}

impl SweetRepository {
    /// Creates a new SweetRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SweetRepository { pool }
    }

    /// Lists every sweet, ordered by id ascending.
    pub async fn list_all(&self) -> DbResult<Vec<Sweet>> {
        let sweets = sqlx::query_as::<_, Sweet>(
            r#"
            SELECT id, name, category, price, quantity, created_at, updated_at
            FROM sweets
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sweets)
    }

    /// Gets a sweet by its id. `None` if the row does not exist.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Sweet>> {
        let sweet = sqlx::query_as::<_, Sweet>(
            r#"
            SELECT id, name, category, price, quantity, created_at, updated_at
            FROM sweets
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sweet)
    }

    /// Inserts a new sweet; the id is assigned by SQLite and both timestamps
    /// are set to now.
    pub async fn insert(&self, fields: &NewSweet) -> DbResult<Sweet> {
        debug!(name = %fields.name, "Inserting sweet");

        let now = Utc::now();

        let sweet = sqlx::query_as::<_, Sweet>(
            r#"
            INSERT INTO sweets (name, category, price, quantity, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, name, category, price, quantity, created_at, updated_at
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.category)
        .bind(fields.price)
        .bind(fields.quantity)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(sweet)
    }

    /// Full overwrite of the four mutable fields; `updated_at` is refreshed,
    /// `created_at` is left untouched. `None` if the row does not exist.
    pub async fn replace(&self, id: i64, fields: &NewSweet) -> DbResult<Option<Sweet>> {
        debug!(id, "Updating sweet");

        let now = Utc::now();

        let sweet = sqlx::query_as::<_, Sweet>(
            r#"
            UPDATE sweets
            SET name = ?1, category = ?2, price = ?3, quantity = ?4, updated_at = ?5
            WHERE id = ?6
            RETURNING id, name, category, price, quantity, created_at, updated_at
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.category)
        .bind(fields.price)
        .bind(fields.quantity)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sweet)
    }

    /// Deletes a sweet. Returns `true` if a row existed and was removed.
    pub async fn remove(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting sweet");

        let result = sqlx::query("DELETE FROM sweets WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Exact category match, ordered by name ascending.
    pub async fn find_by_category(&self, category: &str) -> DbResult<Vec<Sweet>> {
        let sweets = sqlx::query_as::<_, Sweet>(
            r#"
            SELECT id, name, category, price, quantity, created_at, updated_at
            FROM sweets
            WHERE category = ?1
            ORDER BY name
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(sweets)
    }

    /// Case-insensitive substring match on name, ordered by name ascending.
    pub async fn find_by_name_contains(&self, fragment: &str) -> DbResult<Vec<Sweet>> {
        debug!(fragment = %fragment, "Searching sweets by name");

        // LOWER on both sides rather than relying on SQLite's LIKE pragma.
        let sweets = sqlx::query_as::<_, Sweet>(
            r#"
            SELECT id, name, category, price, quantity, created_at, updated_at
            FROM sweets
            WHERE LOWER(name) LIKE '%' || LOWER(?1) || '%'
            ORDER BY name
            "#,
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await?;

        Ok(sweets)
    }

    /// Inclusive price range match, ordered by price ascending.
    pub async fn find_by_price_range(&self, min: f64, max: f64) -> DbResult<Vec<Sweet>> {
        let sweets = sqlx::query_as::<_, Sweet>(
            r#"
            SELECT id, name, category, price, quantity, created_at, updated_at
            FROM sweets
            WHERE price BETWEEN ?1 AND ?2
            ORDER BY price
            "#,
        )
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await?;

        Ok(sweets)
    }

    /// Atomically deducts `amount` units, guarded so stock can never go
    /// negative. `None` means the row is missing OR the guard failed
    /// (insufficient stock); the caller distinguishes the two with a read.
    pub async fn deduct_quantity(&self, id: i64, amount: i64) -> DbResult<Option<Sweet>> {
        debug!(id, amount, "Deducting stock");

        let now = Utc::now();

        let sweet = sqlx::query_as::<_, Sweet>(
            r#"
            UPDATE sweets
            SET quantity = quantity - ?2, updated_at = ?3
            WHERE id = ?1 AND quantity >= ?2
            RETURNING id, name, category, price, quantity, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(amount)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sweet)
    }

    /// Atomically adds `amount` units, no upper bound. `None` if the row does
    /// not exist.
    pub async fn add_quantity(&self, id: i64, amount: i64) -> DbResult<Option<Sweet>> {
        debug!(id, amount, "Adding stock");

        let now = Utc::now();

        let sweet = sqlx::query_as::<_, Sweet>(
            r#"
            UPDATE sweets
            SET quantity = quantity + ?2, updated_at = ?3
            WHERE id = ?1
            RETURNING id, name, category, price, quantity, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(amount)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sweet)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
