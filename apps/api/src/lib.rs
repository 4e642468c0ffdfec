//! # Sweet Shop API
//!
//! REST server for the sweet shop inventory.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Request Flow                                │
//! │                                                                     │
//! │  Client ──► axum Router ──► auth_guard (for /sweets/*)             │
//! │                 │                                                   │
//! │                 ▼                                                   │
//! │         Route handler (routes/)  ← typed input structs (dto)        │
//! │                 │                                                   │
//! │                 ▼                                                   │
//! │         SweetService / AuthService (services/)                      │
//! │                 │                                                   │
//! │                 ▼                                                   │
//! │         Repositories (sweetshop-db) ──► SQLite                      │
//! │                                                                     │
//! │  Errors flow back as ApiError and map onto 400/401/404/500 with    │
//! │  the uniform {success:false, ...} envelope.                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PORT` - HTTP port (default: 3000)
//! - `DATABASE_PATH` - SQLite file path (default: ./sweetshop.db)
//! - `JWT_SECRET` - Secret for JWT signing
//! - `JWT_TOKEN_LIFETIME_SECS` - Token lifetime (default: 86400 = 24 h)

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Json, Router};
use serde_json::json;

use crate::auth::{Argon2Hasher, JwtManager};
use crate::services::{AuthService, SweetService};
use sweetshop_db::Database;

pub use config::ApiConfig;
pub use error::ApiError;

/// Shared application state: the two services, each carrying its own
/// collaborator handles. No ambient globals anywhere.
#[derive(Clone)]
pub struct AppState {
    pub sweets: SweetService,
    pub auth: AuthService,
}

impl AppState {
    /// Wires services onto an opened database.
    pub fn new(db: &Database, jwt_secret: String, token_lifetime_secs: i64) -> Self {
        let jwt = JwtManager::new(jwt_secret, token_lifetime_secs);

        AppState {
            sweets: SweetService::new(db.sweets()),
            auth: AuthService::new(db.users(), Arc::new(Argon2Hasher), jwt),
        }
    }
}

/// Builds the full application router: open `/auth` routes plus
/// bearer-guarded `/sweets` routes.
pub fn build_app(state: AppState) -> Router {
    let protected = routes::sweets::router().route_layer(axum::middleware::from_fn_with_state(
        state.clone(),
        middleware::auth_guard,
    ));

    Router::new()
        .nest("/auth", routes::auth::router())
        .nest("/sweets", protected)
        .fallback(unknown_endpoint)
        .with_state(state)
}

async fn unknown_endpoint() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": "Endpoint not found" })),
    )
}
