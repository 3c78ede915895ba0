use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::orders::{CheckoutReceipt, OrderList},
    error::AppResult,
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/checkout", post(checkout))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "Orders of the session user", body = ApiResponse<OrderList>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders/checkout",
    responses(
        (status = 200, description = "Order created; no data when the cart is empty", body = ApiResponse<CheckoutReceipt>),
        (status = 401, description = "Login required"),
    ),
    tag = "Orders"
)]
pub async fn checkout(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CheckoutReceipt>>> {
    let resp = order_service::checkout(&state).await?;
    Ok(Json(resp))
}
