use uuid::Uuid;

use crate::{
    access::{ensure_can_delete, ensure_can_edit, ensure_user},
    audit::log_audit,
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    error::{AppError, AppResult},
    models::{Money, Product, ProductDraft, ProductPatch, timestamp_now},
    response::{ApiResponse, Meta},
    routes::params::SearchQuery,
    services::fail_soft,
    state::AppState,
    views::filtered_products,
};

pub async fn list_products(
    state: &AppState,
    query: SearchQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let term = query.term();
    let session = state.session().await;
    let items: Vec<Product> = filtered_products(session.products(), term)
        .into_iter()
        .cloned()
        .collect();

    let meta = Meta::new(items.len()).with_query(term.trim());
    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    ))
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let session = state.session().await;
    let product = session.find_product(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let mut session = state.session().await;
    let owner = ensure_user(session.user())?.email.clone();

    let draft = ProductDraft {
        id: Uuid::new_v4(),
        title: required_text("title", payload.title)?,
        description: required_text("description", payload.description)?,
        price: valid_price(payload.price)?,
        condition: payload.condition.unwrap_or_default(),
        image: optional_image(payload.image),
        created_at: timestamp_now(),
    };
    let id = draft.id;

    fail_soft("products", session.add_product(draft, &owner));
    let product = session
        .find_product(id)
        .cloned()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("new product {id} missing")))?;

    log_audit(
        Some(&owner),
        "product_create",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    );

    Ok(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let mut session = state.session().await;
    let actor = ensure_user(session.user())?.email.clone();

    let Some(existing) = session.find_product(id) else {
        return Ok(ApiResponse::empty("Nothing to update"));
    };
    ensure_can_edit(session.user(), existing)?;

    let patch = ProductPatch {
        id,
        title: payload.title.map(|t| required_text("title", t)).transpose()?,
        description: payload
            .description
            .map(|d| required_text("description", d))
            .transpose()?,
        price: payload.price.map(valid_price).transpose()?,
        condition: payload.condition,
        image: payload.image.map(|image| optional_image(Some(image))),
    };

    fail_soft("products", session.edit_product(&patch));
    let product = session.find_product(id).cloned().ok_or(AppError::NotFound)?;

    log_audit(
        Some(&actor),
        "product_update",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    );

    Ok(ApiResponse::success("Updated", product, Some(Meta::empty())))
}

pub async fn delete_product(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut session = state.session().await;
    let actor = ensure_user(session.user())?.email.clone();

    let Some(existing) = session.find_product(id) else {
        return Ok(ApiResponse::empty("Nothing to delete"));
    };
    ensure_can_delete(session.user(), existing)?;

    fail_soft("products", session.delete_product(id));

    log_audit(
        Some(&actor),
        "product_delete",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    );

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn required_text(field: &str, value: String) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(value.to_string())
}

fn valid_price(price: Money) -> AppResult<Money> {
    if price < 0 {
        return Err(AppError::BadRequest(
            "price must not be negative".to_string(),
        ));
    }
    Ok(price)
}

fn optional_image(image: Option<String>) -> Option<String> {
    image
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}
