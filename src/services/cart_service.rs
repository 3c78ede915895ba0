use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::cart::{AddToCartRequest, CartView, UpdateCartQtyRequest},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    services::fail_soft,
    state::AppState,
    store::MarketStore,
    views::{cart_count, cart_total},
};

pub async fn list_cart(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    let session = state.session().await;
    Ok(cart_response("OK", &session))
}

/// Adds one unit of a catalog product, merging into an existing line.
pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartView>> {
    let mut session = state.session().await;
    let product = session
        .find_product(payload.product_id)
        .cloned()
        .ok_or(AppError::NotFound)?;

    fail_soft("cart", session.add_to_cart(&product));

    log_audit(
        session.user().map(|u| u.email.as_str()),
        "cart_add",
        Some("cart"),
        Some(serde_json::json!({ "product_id": product.id })),
    );

    Ok(cart_response("Added to cart", &session))
}

pub async fn update_quantity(
    state: &AppState,
    id: Uuid,
    payload: UpdateCartQtyRequest,
) -> AppResult<ApiResponse<CartView>> {
    let mut session = state.session().await;
    fail_soft("cart", session.update_cart_qty(id, payload.delta));

    log_audit(
        session.user().map(|u| u.email.as_str()),
        "cart_update",
        Some("cart"),
        Some(serde_json::json!({ "product_id": id, "delta": payload.delta })),
    );

    Ok(cart_response("OK", &session))
}

pub async fn remove_from_cart(state: &AppState, id: Uuid) -> AppResult<ApiResponse<CartView>> {
    let mut session = state.session().await;
    fail_soft("cart", session.remove_from_cart(id));

    log_audit(
        session.user().map(|u| u.email.as_str()),
        "cart_remove",
        Some("cart"),
        Some(serde_json::json!({ "product_id": id })),
    );

    Ok(cart_response("Removed from cart", &session))
}

fn cart_response(message: &str, session: &MarketStore) -> ApiResponse<CartView> {
    let cart = session.cart();
    let view = CartView {
        items: cart.to_vec(),
        count: cart_count(cart),
        total: cart_total(cart),
    };
    ApiResponse::success(message, view, Some(Meta::new(cart.len())))
}
