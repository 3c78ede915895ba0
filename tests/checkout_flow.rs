use sale_finds_hub::{
    dto::{
        auth::{AuthMode, LoginRequest},
        cart::{AddToCartRequest, UpdateCartQtyRequest},
    },
    error::AppError,
    services::{auth_service, cart_service, order_service},
    state::AppState,
    storage::MemoryStorage,
    store::checkout::ACKNOWLEDGEMENT,
    views::cart_total,
};

fn login_form(email: &str) -> LoginRequest {
    LoginRequest {
        name: Some("Rina".into()),
        email: email.into(),
        password: "rahasia".into(),
    }
}

// Browse -> add twice -> bump quantity -> login -> checkout.
#[tokio::test]
async fn checkout_moves_cart_into_a_new_order() -> anyhow::Result<()> {
    let state = AppState::open(MemoryStorage::new());
    let (laptop, kamera) = {
        let session = state.session().await;
        (session.products()[0].clone(), session.products()[2].clone())
    };

    for id in [laptop.id, kamera.id, laptop.id] {
        cart_service::add_to_cart(&state, AddToCartRequest { product_id: id }).await?;
    }
    let cart = cart_service::update_quantity(&state, kamera.id, UpdateCartQtyRequest { delta: 2 })
        .await?
        .data
        .expect("cart view");
    assert_eq!(cart.count, 5);
    assert_eq!(cart.total, laptop.price * 2 + kamera.price * 3);

    auth_service::login_user(&state, AuthMode::Login, login_form("rina@example.com")).await?;

    let (before_cart, before_total, before_orders) = {
        let session = state.session().await;
        (
            session.cart().to_vec(),
            cart_total(session.cart()),
            session.orders().len(),
        )
    };

    let receipt = order_service::checkout(&state)
        .await?
        .data
        .expect("receipt");
    assert_eq!(receipt.acknowledgement, ACKNOWLEDGEMENT);
    assert_eq!(receipt.order.total, before_total);
    assert_eq!(receipt.order.items, before_cart);
    assert_eq!(receipt.order.buyer, "rina@example.com");

    let session = state.session().await;
    assert!(session.cart().is_empty());
    assert_eq!(session.orders().len(), before_orders + 1);
    assert_eq!(session.orders()[0], receipt.order);
    Ok(())
}

#[tokio::test]
async fn later_cart_changes_do_not_touch_placed_orders() -> anyhow::Result<()> {
    let state = AppState::open(MemoryStorage::new());
    let product = state.session().await.products()[1].clone();

    auth_service::login_user(&state, AuthMode::Register, login_form("dian@example.com")).await?;
    cart_service::add_to_cart(&state, AddToCartRequest { product_id: product.id }).await?;
    let order = order_service::checkout(&state).await?.data.expect("receipt").order;

    cart_service::add_to_cart(&state, AddToCartRequest { product_id: product.id }).await?;
    cart_service::add_to_cart(&state, AddToCartRequest { product_id: product.id }).await?;

    let session = state.session().await;
    assert_eq!(session.orders()[0].items[0].qty, 1);
    assert_eq!(session.orders()[0], order);
    assert_eq!(session.cart()[0].qty, 2);
    Ok(())
}

#[tokio::test]
async fn checkout_with_an_empty_cart_is_a_no_op() -> anyhow::Result<()> {
    let state = AppState::open(MemoryStorage::new());
    auth_service::login_user(&state, AuthMode::Login, login_form("a@example.com")).await?;

    let resp = order_service::checkout(&state).await?;
    assert!(resp.data.is_none());

    let session = state.session().await;
    assert!(session.orders().is_empty());
    assert!(session.cart().is_empty());
    Ok(())
}

#[tokio::test]
async fn checkout_without_login_asks_for_auth_and_changes_nothing() -> anyhow::Result<()> {
    let state = AppState::open(MemoryStorage::new());
    let product = state.session().await.products()[0].clone();
    cart_service::add_to_cart(&state, AddToCartRequest { product_id: product.id }).await?;

    let result = order_service::checkout(&state).await;
    assert!(matches!(result, Err(AppError::AuthRequired)));

    let session = state.session().await;
    assert!(session.orders().is_empty());
    assert_eq!(session.cart().len(), 1);
    Ok(())
}

#[tokio::test]
async fn my_orders_only_lists_the_session_buyer() -> anyhow::Result<()> {
    let state = AppState::open(MemoryStorage::new());
    let product = state.session().await.products()[3].clone();

    for email in ["first@example.com", "second@example.com"] {
        auth_service::login_user(&state, AuthMode::Login, login_form(email)).await?;
        cart_service::add_to_cart(&state, AddToCartRequest { product_id: product.id }).await?;
        order_service::checkout(&state).await?;
    }

    let mine = order_service::list_orders(&state).await?.data.expect("orders");
    assert_eq!(mine.items.len(), 1);
    assert_eq!(mine.items[0].buyer, "second@example.com");

    auth_service::logout_user(&state).await?;
    let none = order_service::list_orders(&state).await?.data.expect("orders");
    assert!(none.items.is_empty());
    Ok(())
}
