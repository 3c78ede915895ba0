use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Condition, Money, Product};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub title: String,
    pub description: String,
    pub price: Money,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Every field is optional; a blank `image` clears the image.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub condition: Option<Condition>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub items: Vec<Product>,
}
