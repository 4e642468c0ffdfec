//! # sweetshop-db: Database Layer
//!
//! SQLite persistence for the sweet shop: connection pool, embedded
//! migrations, and the repositories that own every SQL statement.
//!
//! ## Layering
//! ```text
//! Services (apps/api)
//!      │
//!      ▼
//! Repositories (this crate)  ──►  "not found" is Option::None / false
//!      │                          storage faults are DbError
//!      ▼
//! SqlitePool (sqlx)
//! ```
//!
//! Repositories never interpret business rules; they report exactly what the
//! database did and let the service layer decide what it means.

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::sweet::SweetRepository;
pub use repository::user::UserRepository;
