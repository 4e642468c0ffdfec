//! Authentication routes (open, no bearer token required).

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use crate::dto::{LoginRequest, RegisterRequest};
use crate::AppState;

/// Builds the `/auth` sub-router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// POST /auth/register
async fn register(State(state): State<AppState>, Json(body): Json<RegisterRequest>) -> Response {
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return missing_credentials();
    };

    match state.auth.register(&email, &password).await {
        Ok(session) => (
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "message": "User registered successfully",
                "data": session,
            })),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

/// POST /auth/login
async fn login(State(state): State<AppState>, Json(body): Json<LoginRequest>) -> Response {
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return missing_credentials();
    };

    match state.auth.login(&email, &password).await {
        Ok(session) => Json(json!({
            "success": true,
            "message": "Login successful",
            "data": session,
        }))
        .into_response(),
        Err(err) => err.into_response(),
    }
}

fn missing_credentials() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "success": false,
            "message": "Email and password are required",
        })),
    )
        .into_response()
}
