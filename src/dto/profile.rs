use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Order, Product, User};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileView {
    pub user: User,
    pub listings: Vec<Product>,
    pub orders: Vec<Order>,
}
