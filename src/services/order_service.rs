use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::orders::{CheckoutReceipt, OrderList},
    error::{AppError, AppResult},
    models::timestamp_now,
    response::{ApiResponse, Meta},
    services::fail_soft,
    state::AppState,
    store::checkout::{self, ACKNOWLEDGEMENT, CheckoutRejection},
    views::my_orders,
};

/// Turns the cart into an order. Without a user this asks for login; with an
/// empty cart it is a no-op. On success the order is prepended and the cart
/// cleared in one store call.
pub async fn checkout(state: &AppState) -> AppResult<ApiResponse<CheckoutReceipt>> {
    let mut session = state.session().await;

    let order = match checkout::validate(session.user(), session.cart()) {
        Ok(validated) => validated.into_order(Uuid::new_v4(), timestamp_now()),
        Err(CheckoutRejection::AuthRequired) => {
            tracing::debug!("checkout without a session user");
            return Err(AppError::AuthRequired);
        }
        Err(CheckoutRejection::EmptyCart) => {
            tracing::debug!("checkout with an empty cart");
            return Ok(ApiResponse::empty("Cart is empty"));
        }
    };

    let order_id = order.id;
    let total = order.total;
    let buyer = order.buyer.clone();
    fail_soft("orders+cart", session.commit_checkout(order.clone()));

    log_audit(
        Some(&buyer),
        "checkout",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order_id, "total": total })),
    );
    tracing::info!(%order_id, total, "order committed");

    Ok(ApiResponse::success(
        "Checkout success",
        CheckoutReceipt {
            order,
            acknowledgement: ACKNOWLEDGEMENT.to_string(),
        },
        Some(Meta::empty()),
    ))
}

/// Orders placed by the session user, newest first. Empty without a user.
pub async fn list_orders(state: &AppState) -> AppResult<ApiResponse<OrderList>> {
    let session = state.session().await;
    let items: Vec<_> = my_orders(session.orders(), session.user())
        .into_iter()
        .cloned()
        .collect();

    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("Ok", OrderList { items }, Some(meta)))
}
