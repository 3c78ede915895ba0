use uuid::Uuid;

use crate::{
    access::ensure_admin,
    audit::log_audit,
    dto::{orders::OrderList, products::ProductList},
    error::AppResult,
    response::{ApiResponse, Meta},
    services::fail_soft,
    state::AppState,
};

pub async fn list_all_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let session = state.session().await;
    ensure_admin(session.user())?;

    let items = session.products().to_vec();
    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn list_all_orders(state: &AppState) -> AppResult<ApiResponse<OrderList>> {
    let session = state.session().await;
    ensure_admin(session.user())?;

    let items = session.orders().to_vec();
    let meta = Meta::new(items.len());
    Ok(ApiResponse::success("Ok", OrderList { items }, Some(meta)))
}

/// Admins may remove any listing regardless of owner. Unknown ids are a no-op.
pub async fn delete_any_product(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut session = state.session().await;
    let admin = ensure_admin(session.user())?.email.clone();

    let Some(owner) = session.find_product(id).map(|p| p.owner.clone()) else {
        return Ok(ApiResponse::empty("Nothing to delete"));
    };
    fail_soft("products", session.delete_product(id));

    log_audit(
        Some(&admin),
        "admin_product_delete",
        Some("products"),
        Some(serde_json::json!({ "product_id": id, "owner": owner })),
    );

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
