//! Pure transitions over the store's collections. Each takes the old
//! collection by reference and returns the next one; unknown ids are no-ops.

use uuid::Uuid;

use crate::models::{CartLine, Product, ProductDraft, ProductPatch};

pub fn add_product(products: &[Product], draft: ProductDraft, owner: &str) -> Vec<Product> {
    let mut next = Vec::with_capacity(products.len() + 1);
    next.push(draft.into_product(owner));
    next.extend_from_slice(products);
    next
}

pub fn edit_product(products: &[Product], patch: &ProductPatch) -> Vec<Product> {
    products
        .iter()
        .map(|product| {
            if product.id != patch.id {
                return product.clone();
            }
            let mut edited = product.clone();
            if let Some(title) = &patch.title {
                edited.title = title.clone();
            }
            if let Some(description) = &patch.description {
                edited.description = description.clone();
            }
            if let Some(price) = patch.price {
                edited.price = price;
            }
            if let Some(condition) = patch.condition {
                edited.condition = condition;
            }
            if let Some(image) = &patch.image {
                edited.image = image.clone();
            }
            edited
        })
        .collect()
}

pub fn delete_product(products: &[Product], id: Uuid) -> Vec<Product> {
    products.iter().filter(|p| p.id != id).cloned().collect()
}

pub fn add_to_cart(cart: &[CartLine], product: &Product) -> Vec<CartLine> {
    if cart.iter().any(|line| line.id == product.id) {
        return cart
            .iter()
            .map(|line| {
                if line.id == product.id {
                    CartLine {
                        qty: line.qty.saturating_add(1),
                        ..line.clone()
                    }
                } else {
                    line.clone()
                }
            })
            .collect();
    }
    let mut next = cart.to_vec();
    next.push(CartLine::from_product(product));
    next
}

pub fn update_cart_qty(cart: &[CartLine], id: Uuid, delta: i64) -> Vec<CartLine> {
    cart.iter()
        .map(|line| {
            if line.id != id {
                return line.clone();
            }
            let qty = i64::from(line.qty).saturating_add(delta).max(1);
            CartLine {
                qty: u32::try_from(qty).unwrap_or(u32::MAX),
                ..line.clone()
            }
        })
        .collect()
}

pub fn remove_from_cart(cart: &[CartLine], id: Uuid) -> Vec<CartLine> {
    cart.iter().filter(|line| line.id != id).cloned().collect()
}
