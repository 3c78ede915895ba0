//! Read-side projections recomputed from raw state on every request.

use crate::models::{CartLine, Money, Order, Product, User};

/// Case-insensitive substring match on title or description. A blank term
/// matches everything; catalog order is preserved.
pub fn filtered_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn my_listings<'a>(products: &'a [Product], user: Option<&User>) -> Vec<&'a Product> {
    let Some(user) = user else {
        return Vec::new();
    };
    products.iter().filter(|p| p.owner == user.email).collect()
}

pub fn my_orders<'a>(orders: &'a [Order], user: Option<&User>) -> Vec<&'a Order> {
    let Some(user) = user else {
        return Vec::new();
    };
    orders.iter().filter(|o| o.buyer == user.email).collect()
}

pub fn cart_count(cart: &[CartLine]) -> u64 {
    cart.iter().map(|line| u64::from(line.qty)).sum()
}

pub fn cart_total(cart: &[CartLine]) -> Money {
    cart.iter()
        .fold(0, |total: Money, line| total.saturating_add(line.subtotal()))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::{
        models::{OrderStatus, Role},
        store::catalog::demo_products,
    };

    fn user(email: &str) -> User {
        User {
            name: "Sari".into(),
            email: email.into(),
            role: Role::Buyer,
        }
    }

    fn line(price: Money, qty: u32) -> CartLine {
        CartLine {
            id: Uuid::new_v4(),
            title: "x".into(),
            price,
            image: None,
            qty,
        }
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let catalog = demo_products();

        let hits = filtered_products(&catalog, "kamera");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Kamera Mirrorless");

        let hits = filtered_products(&catalog, "  KOMUTER ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Sepeda Lipat Bekas");

        assert_eq!(filtered_products(&catalog, "").len(), catalog.len());
        assert!(filtered_products(&catalog, "kulkas").is_empty());
    }

    #[test]
    fn per_user_views_are_empty_without_a_user() {
        let catalog = demo_products();
        assert!(my_listings(&catalog, None).is_empty());

        let owner = user("seller2@example.com");
        let mine = my_listings(&catalog, Some(&owner));
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].owner, "seller2@example.com");

        let order = Order {
            id: Uuid::new_v4(),
            items: vec![line(10, 1)],
            buyer: owner.email.clone(),
            total: 10,
            created_at: Utc::now(),
            status: OrderStatus::Processing,
        };
        let orders = vec![order];
        assert!(my_orders(&orders, None).is_empty());
        assert_eq!(my_orders(&orders, Some(&owner)).len(), 1);
        assert!(my_orders(&orders, Some(&user("other@example.com"))).is_empty());
    }

    #[test]
    fn totals_match_hand_computed_sums() {
        let carts = [
            vec![],
            vec![line(3_500_000, 1)],
            vec![line(1_200_000, 2), line(2_800_000, 1), line(1, 7)],
        ];
        for cart in carts {
            let expected: Money = cart.iter().map(|l| l.price * Money::from(l.qty)).sum();
            let count: u64 = cart.iter().map(|l| u64::from(l.qty)).sum();
            assert_eq!(cart_total(&cart), expected);
            assert_eq!(cart_count(&cart), count);
        }
    }
}
