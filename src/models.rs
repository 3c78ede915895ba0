use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Prices and totals, in whole rupiah.
pub type Money = i64;

/// Shown wherever a product or cart line has no image of its own.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?q=80&w=600&auto=format&fit=crop";

/// Current time at the millisecond precision timestamps are persisted with.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Condition {
    #[serde(rename = "Seperti baru")]
    LikeNew,
    #[default]
    #[serde(rename = "Bekas baik")]
    GoodUsed,
    #[serde(rename = "Butuh perbaikan")]
    NeedsRepair,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "lenient_money")]
    pub price: Money,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image: Option<String>,
    pub owner: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn display_image(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub id: Uuid,
    pub title: String,
    #[serde(deserialize_with = "lenient_money")]
    pub price: Money,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image: Option<String>,
    pub qty: u32,
}

impl CartLine {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            qty: 1,
        }
    }

    pub fn subtotal(&self) -> Money {
        self.price.saturating_mul(Money::from(self.qty))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Proses")]
    Processing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub items: Vec<CartLine>,
    pub buyer: String,
    #[serde(deserialize_with = "lenient_money")]
    pub total: Money,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: OrderStatus,
}

/// A product as submitted from the sell form, before an owner is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: Money,
    pub condition: Condition,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProductDraft {
    pub fn into_product(self, owner: &str) -> Product {
        Product {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            condition: self.condition,
            image: self.image,
            owner: owner.to_string(),
            created_at: self.created_at,
        }
    }
}

/// Field-wise edit of an existing product. `None` leaves a field as it is;
/// `image: Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub condition: Option<Condition>,
    pub image: Option<Option<String>>,
}

// Older catalogs stored the price exactly as typed into the form, so it may
// arrive as a numeric string or a float.
fn lenient_money<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(value) => Ok(value),
        Raw::Float(value) if value.is_finite() => Ok(value.round() as Money),
        Raw::Float(value) => Err(serde::de::Error::custom(format!("invalid price {value}"))),
        Raw::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(0);
            }
            text.parse::<Money>()
                .or_else(|_| text.parse::<f64>().map(|value| value.round() as Money))
                .map_err(|_| serde::de::Error::custom(format!("invalid price {text:?}")))
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_products_written_by_the_browser_app() {
        let raw = r#"{
            "id": "8f7c1f0e-3a57-4d3c-9a6f-2d1b3c4e5f60",
            "title": "Sepeda Lipat Bekas",
            "description": "Ringan dan praktis",
            "price": "1200000",
            "condition": "Bekas baik",
            "image": "",
            "owner": "seller2@example.com",
            "createdAt": 1700000000000
        }"#;

        let product: Product = serde_json::from_str(raw).expect("product");
        assert_eq!(product.price, 1_200_000);
        assert_eq!(product.condition, Condition::GoodUsed);
        assert_eq!(product.image, None);
        assert_eq!(product.display_image(), PLACEHOLDER_IMAGE);
        assert_eq!(product.created_at.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn order_status_keeps_its_display_name() {
        let json = serde_json::to_value(OrderStatus::Processing).expect("status");
        assert_eq!(json, serde_json::json!("Proses"));
    }
}
