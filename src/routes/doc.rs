use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{AuthMode, LoginRequest, SessionView},
        cart::{AddToCartRequest, CartView, UpdateCartQtyRequest},
        orders::{CheckoutReceipt, OrderList},
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
        profile::ProfileView,
    },
    models::{CartLine, Condition, Order, OrderStatus, Product, Role, User},
    response::{ApiResponse, Meta},
    routes::{admin, auth, cart, health, orders, params, products, profile},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::register,
        auth::logout,
        auth::me,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        orders::list_orders,
        orders::checkout,
        profile::profile,
        admin::list_all_products,
        admin::list_all_orders,
        admin::delete_any_product
    ),
    components(
        schemas(
            User,
            Role,
            Product,
            Condition,
            CartLine,
            Order,
            OrderStatus,
            AuthMode,
            LoginRequest,
            SessionView,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            AddToCartRequest,
            UpdateCartQtyRequest,
            CartView,
            CheckoutReceipt,
            OrderList,
            ProfileView,
            health::HealthData,
            params::SearchQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartView>,
            ApiResponse<CheckoutReceipt>,
            ApiResponse<OrderList>,
            ApiResponse<ProfileView>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Demo login, register and logout"),
        (name = "Products", description = "Catalog browsing and selling"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Orders", description = "Checkout and order history"),
        (name = "Profile", description = "My listings and my orders"),
        (name = "Admin", description = "Admin panel"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
