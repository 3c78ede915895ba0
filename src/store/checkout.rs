//! Checkout as a typestate: nothing (idle) → [`ValidatedCheckout`] → [`Order`]
//! (committed). A rejected validation leaves the store untouched, and a
//! committed order is handed to [`super::MarketStore::commit_checkout`],
//! after which the next invocation starts from idle again.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    models::{CartLine, Order, OrderStatus, User},
    views::cart_total,
};

pub const ACKNOWLEDGEMENT: &str = "Pesanan dibuat. Penjual akan dihubungi di luar sistem.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutRejection {
    /// No user is logged in; the caller should present login.
    AuthRequired,
    /// Nothing to order. Not an error, the command is simply a no-op.
    EmptyCart,
}

#[derive(Debug)]
pub struct ValidatedCheckout<'a> {
    buyer: &'a User,
    cart: &'a [CartLine],
}

pub fn validate<'a>(
    user: Option<&'a User>,
    cart: &'a [CartLine],
) -> Result<ValidatedCheckout<'a>, CheckoutRejection> {
    let buyer = user.ok_or(CheckoutRejection::AuthRequired)?;
    if cart.is_empty() {
        return Err(CheckoutRejection::EmptyCart);
    }
    Ok(ValidatedCheckout { buyer, cart })
}

impl ValidatedCheckout<'_> {
    /// Builds the order from a by-value snapshot of the cart.
    pub fn into_order(self, id: Uuid, now: DateTime<Utc>) -> Order {
        Order {
            id,
            items: self.cart.to_vec(),
            buyer: self.buyer.email.clone(),
            total: cart_total(self.cart),
            created_at: now,
            status: OrderStatus::Processing,
        }
    }
}
