//! Bearer-token authentication middleware.
//!
//! Guards every `/sweets` route. The header must be exactly two
//! space-separated parts with the literal scheme `Bearer`; anything else is
//! rejected before the token is even looked at.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::AppState;

/// The verified identity attached to a request after the guard passes.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub email: String,
}

/// Rejects requests without a valid `Authorization: Bearer <token>` header.
pub async fn auth_guard(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let header = match req.headers().get(AUTHORIZATION) {
        Some(value) => value,
        None => return unauthorized("No token provided"),
    };

    let header = match header.to_str() {
        Ok(value) => value,
        Err(_) => return unauthorized("Invalid token format"),
    };

    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return unauthorized("Invalid token format");
    }

    match state.auth.verify_token(parts[1]) {
        Ok(claims) => {
            req.extensions_mut().insert(AuthUser {
                user_id: claims.user_id,
                email: claims.email,
            });
            next.run(req).await
        }
        Err(_) => unauthorized("Invalid or expired token"),
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}
