//! Inventory routes (all bearer-protected).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::json;
use tracing::info;

use crate::dto::{PriceRangeQuery, QuantityRequest};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::AppState;
use sweetshop_core::NewSweet;

/// Builds the `/sweets` sub-router. The auth guard is layered on by the app
/// builder, not here.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sweets).post(create_sweet))
        .route(
            "/:id",
            get(get_sweet).put(update_sweet).delete(delete_sweet),
        )
        .route("/search/category/:category", get(search_by_category))
        .route("/search/name/:name", get(search_by_name))
        .route("/search/price", get(search_by_price))
        .route("/:id/purchase", post(purchase_sweet))
        .route("/:id/restock", post(restock_sweet))
        .route("/:id/stock", get(check_stock))
}

/// GET /sweets
async fn list_sweets(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let sweets = state.sweets.list_all().await?;
    Ok(Json(json!({
        "success": true,
        "count": sweets.len(),
        "data": sweets,
    })))
}

/// GET /sweets/:id
async fn get_sweet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let sweet = state.sweets.get_by_id(id).await?;
    Ok(Json(json!({ "success": true, "data": sweet })))
}

/// POST /sweets
async fn create_sweet(
    State(state): State<AppState>,
    Json(body): Json<NewSweet>,
) -> Result<impl IntoResponse, ApiError> {
    let sweet = state.sweets.add(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Sweet created successfully",
            "data": sweet,
        })),
    ))
}

/// PUT /sweets/:id
async fn update_sweet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<NewSweet>,
) -> Result<impl IntoResponse, ApiError> {
    let sweet = state.sweets.update(id, body).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Sweet updated successfully",
        "data": sweet,
    })))
}

/// DELETE /sweets/:id
async fn delete_sweet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.sweets.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Sweet deleted successfully",
    })))
}

/// GET /sweets/search/category/:category
async fn search_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let sweets = state.sweets.search_by_category(&category).await?;
    Ok(Json(json!({
        "success": true,
        "count": sweets.len(),
        "data": sweets,
    })))
}

/// GET /sweets/search/name/:name
async fn search_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let sweets = state.sweets.search_by_name(&name).await?;
    Ok(Json(json!({
        "success": true,
        "count": sweets.len(),
        "data": sweets,
    })))
}

/// GET /sweets/search/price?min=&max=
async fn search_by_price(
    State(state): State<AppState>,
    Query(range): Query<PriceRangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (min, max) = range.bounds();

    let sweets = state.sweets.search_by_price_range(min, max).await?;
    Ok(Json(json!({
        "success": true,
        "count": sweets.len(),
        "data": sweets,
    })))
}

/// POST /sweets/:id/purchase
async fn purchase_sweet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<QuantityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let sweet = state.sweets.purchase(id, body.quantity).await?;
    info!(
        sweet_id = id,
        quantity = body.quantity,
        user_id = user.user_id,
        "Purchase completed"
    );
    Ok(Json(json!({
        "success": true,
        "message": format!("Purchased {} units successfully", body.quantity),
        "data": sweet,
    })))
}

/// POST /sweets/:id/restock
async fn restock_sweet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<QuantityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let sweet = state.sweets.restock(id, body.quantity).await?;
    info!(
        sweet_id = id,
        quantity = body.quantity,
        user_id = user.user_id,
        "Restock completed"
    );
    Ok(Json(json!({
        "success": true,
        "message": format!("Restocked {} units successfully", body.quantity),
        "data": sweet,
    })))
}

/// GET /sweets/:id/stock
async fn check_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let in_stock = state.sweets.check_stock(id).await?;
    Ok(Json(json!({
        "success": true,
        "inStock": in_stock,
        "message": if in_stock { "Sweet is in stock" } else { "Sweet is out of stock" },
    })))
}
