use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dto::{orders::OrderList, products::ProductList},
    error::AppResult,
    response::ApiResponse,
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_all_products))
        .route("/products/{id}", delete(delete_any_product))
        .route("/orders", get(list_all_orders))
}

#[utoipa::path(
    get,
    path = "/api/admin/products",
    responses(
        (status = 200, description = "Every listing (admin only)", body = ApiResponse<ProductList>),
        (status = 401, description = "Login required"),
        (status = 403, description = "Forbidden"),
    ),
    tag = "Admin"
)]
pub async fn list_all_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = admin_service::list_all_products(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    responses(
        (status = 200, description = "Every order (admin only)", body = ApiResponse<OrderList>),
        (status = 401, description = "Login required"),
        (status = 403, description = "Forbidden"),
    ),
    tag = "Admin"
)]
pub async fn list_all_orders(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = admin_service::list_all_orders(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted any listing", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Login required"),
        (status = 403, description = "Forbidden"),
    ),
    tag = "Admin"
)]
pub async fn delete_any_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = admin_service::delete_any_product(&state, id).await?;
    Ok(Json(resp))
}
