use sale_finds_hub::{
    dto::{
        auth::{AuthMode, LoginRequest},
        products::{CreateProductRequest, UpdateProductRequest},
    },
    error::AppError,
    models::{Condition, Role, User},
    routes::params::SearchQuery,
    services::{admin_service, auth_service, product_service, profile_service},
    state::AppState,
    storage::MemoryStorage,
};
use uuid::Uuid;

async fn login(state: &AppState, email: &str) -> anyhow::Result<()> {
    auth_service::login_user(
        state,
        AuthMode::Login,
        LoginRequest {
            name: None,
            email: email.into(),
            password: "pw".into(),
        },
    )
    .await?;
    Ok(())
}

fn listing(title: &str) -> CreateProductRequest {
    CreateProductRequest {
        title: title.into(),
        description: "Masih mulus, jarang dipakai".into(),
        price: 450_000,
        condition: None,
        image: Some("   ".into()),
    }
}

#[tokio::test]
async fn search_finds_the_camera_case_insensitively() -> anyhow::Result<()> {
    let state = AppState::open(MemoryStorage::new());

    let resp = product_service::list_products(
        &state,
        SearchQuery {
            q: Some("KaMeRa".into()),
        },
    )
    .await?;
    let items = resp.data.expect("products").items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Kamera Mirrorless");
    assert_eq!(resp.meta.and_then(|m| m.total), Some(1));

    let all = product_service::list_products(&state, SearchQuery::default())
        .await?
        .data
        .expect("products");
    assert_eq!(all.items.len(), 4);
    Ok(())
}

#[tokio::test]
async fn selling_requires_login_and_prepends_the_listing() -> anyhow::Result<()> {
    let state = AppState::open(MemoryStorage::new());

    let anonymous = product_service::create_product(&state, listing("Gitar Akustik")).await;
    assert!(matches!(anonymous, Err(AppError::AuthRequired)));
    assert_eq!(state.session().await.products().len(), 4);

    login(&state, "penjual@example.com").await?;
    let product = product_service::create_product(&state, listing("Gitar Akustik"))
        .await?
        .data
        .expect("product");
    assert_eq!(product.owner, "penjual@example.com");
    assert_eq!(product.condition, Condition::GoodUsed);
    assert_eq!(product.image, None);

    let session = state.session().await;
    assert_eq!(session.products().len(), 5);
    assert_eq!(session.products()[0].id, product.id);
    Ok(())
}

#[tokio::test]
async fn invalid_listings_are_rejected() -> anyhow::Result<()> {
    let state = AppState::open(MemoryStorage::new());
    login(&state, "penjual@example.com").await?;

    let mut negative = listing("Meja");
    negative.price = -1;
    assert!(matches!(
        product_service::create_product(&state, negative).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        product_service::create_product(&state, listing("  ")).await,
        Err(AppError::BadRequest(_))
    ));
    assert_eq!(state.session().await.products().len(), 4);
    Ok(())
}

#[tokio::test]
async fn only_the_owner_edits_and_unknown_ids_are_no_ops() -> anyhow::Result<()> {
    let state = AppState::open(MemoryStorage::new());
    login(&state, "owner@example.com").await?;
    let product = product_service::create_product(&state, listing("Rak Buku"))
        .await?
        .data
        .expect("product");

    let edit = UpdateProductRequest {
        price: Some(400_000),
        condition: Some(Condition::LikeNew),
        ..UpdateProductRequest::default()
    };
    let updated = product_service::update_product(&state, product.id, edit)
        .await?
        .data
        .expect("updated");
    assert_eq!(updated.price, 400_000);
    assert_eq!(updated.title, "Rak Buku");
    assert_eq!(updated.created_at, product.created_at);

    let before = state.session().await.products().to_vec();
    let unknown = product_service::update_product(
        &state,
        Uuid::new_v4(),
        UpdateProductRequest {
            title: Some("x".into()),
            ..UpdateProductRequest::default()
        },
    )
    .await?;
    assert!(unknown.data.is_none());
    let deleted = product_service::delete_product(&state, Uuid::new_v4()).await?;
    assert!(deleted.data.is_none());
    assert_eq!(state.session().await.products(), before.as_slice());

    login(&state, "someone-else@example.com").await?;
    let denied = product_service::update_product(
        &state,
        product.id,
        UpdateProductRequest {
            title: Some("Dicuri".into()),
            ..UpdateProductRequest::default()
        },
    )
    .await;
    assert!(matches!(denied, Err(AppError::Forbidden)));
    assert!(matches!(
        product_service::delete_product(&state, product.id).await,
        Err(AppError::Forbidden)
    ));
    Ok(())
}

#[tokio::test]
async fn admins_delete_any_listing_but_cannot_edit_it() -> anyhow::Result<()> {
    let state = AppState::open(MemoryStorage::new());
    let target = state.session().await.products()[0].clone();

    login(&state, "buyer@example.com").await?;
    assert!(matches!(
        admin_service::list_all_orders(&state).await,
        Err(AppError::Forbidden)
    ));

    let admin = User {
        name: "Admin".into(),
        email: "admin@example.com".into(),
        role: Role::Admin,
    };
    state.session().await.login(admin)?;

    let edit = product_service::update_product(
        &state,
        target.id,
        UpdateProductRequest {
            price: Some(1),
            ..UpdateProductRequest::default()
        },
    )
    .await;
    assert!(matches!(edit, Err(AppError::Forbidden)));

    admin_service::delete_any_product(&state, target.id).await?;
    let remaining = admin_service::list_all_products(&state)
        .await?
        .data
        .expect("products");
    assert_eq!(remaining.items.len(), 3);
    assert!(remaining.items.iter().all(|p| p.id != target.id));
    Ok(())
}

#[tokio::test]
async fn profile_lists_my_listings_and_requires_login() -> anyhow::Result<()> {
    let state = AppState::open(MemoryStorage::new());
    assert!(matches!(
        profile_service::get_profile(&state).await,
        Err(AppError::AuthRequired)
    ));

    login(&state, "seller3@example.com").await?;
    let profile = profile_service::get_profile(&state)
        .await?
        .data
        .expect("profile");
    assert_eq!(profile.user.email, "seller3@example.com");
    assert_eq!(profile.listings.len(), 1);
    assert_eq!(profile.listings[0].title, "Kamera Mirrorless");
    assert!(profile.orders.is_empty());
    Ok(())
}

#[tokio::test]
async fn lookup_and_ownership_are_checked_before_the_form() -> anyhow::Result<()> {
    let state = AppState::open(MemoryStorage::new());
    let foreign = state.session().await.products()[0].clone();
    login(&state, "penjual@example.com").await?;

    let blank_title = || UpdateProductRequest {
        title: Some("   ".into()),
        ..UpdateProductRequest::default()
    };

    let unknown = product_service::update_product(&state, Uuid::new_v4(), blank_title()).await?;
    assert!(unknown.data.is_none());

    let denied = product_service::update_product(&state, foreign.id, blank_title()).await;
    assert!(matches!(denied, Err(AppError::Forbidden)));

    let own = product_service::create_product(&state, listing("Lampu Meja"))
        .await?
        .data
        .expect("product");
    let invalid = product_service::update_product(&state, own.id, blank_title()).await;
    assert!(matches!(invalid, Err(AppError::BadRequest(_))));
    Ok(())
}
