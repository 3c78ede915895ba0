//! The session's domain state: current user, catalog, cart and orders.
//!
//! Every mutation replaces a whole slot in memory and then writes that slot
//! through to storage before returning. In-memory state is authoritative: a
//! failed write is returned to the caller to log, never rolled back.

use uuid::Uuid;

use crate::{
    error::StorageResult,
    models::{CartLine, Order, Product, ProductDraft, ProductPatch, User},
    storage::{KeyValueStorage, PersistentStore},
};

pub mod catalog;
pub mod checkout;
pub mod transitions;

/// Persisted key of each slot.
pub mod slots {
    pub const USER: &str = "sfh_user";
    pub const PRODUCTS: &str = "sfh_products";
    pub const CART: &str = "sfh_cart";
    pub const ORDERS: &str = "sfh_orders";
}

pub struct MarketStore {
    persist: PersistentStore,
    user: Option<User>,
    products: Vec<Product>,
    cart: Vec<CartLine>,
    orders: Vec<Order>,
}

impl MarketStore {
    /// Loads every slot, falling back to defaults for anything missing or
    /// unreadable, then mirrors the result back to storage.
    pub fn open(storage: impl KeyValueStorage + 'static) -> Self {
        let persist = PersistentStore::new(storage);
        let user: Option<User> = persist.load(slots::USER, None);
        let products = persist.load_or_else(slots::PRODUCTS, catalog::demo_products);
        let cart: Vec<CartLine> = persist.load(slots::CART, Vec::new());
        let orders: Vec<Order> = persist.load(slots::ORDERS, Vec::new());

        let store = Self {
            persist,
            user,
            products,
            cart,
            orders,
        };
        if let Err(err) = store.persist_all() {
            tracing::warn!(error = %err, "initial slot mirror incomplete");
        }
        tracing::info!(
            logged_in = store.user.is_some(),
            products = store.products.len(),
            cart_lines = store.cart.len(),
            orders = store.orders.len(),
            "market store loaded"
        );
        store
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn find_product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn set_user(&mut self, user: Option<User>) -> StorageResult<()> {
        self.user = user;
        self.write_user()
    }

    pub fn set_products(&mut self, products: Vec<Product>) -> StorageResult<()> {
        self.products = products;
        self.persist.save(slots::PRODUCTS, &self.products)
    }

    pub fn set_cart(&mut self, cart: Vec<CartLine>) -> StorageResult<()> {
        self.cart = cart;
        self.persist.save(slots::CART, &self.cart)
    }

    pub fn set_orders(&mut self, orders: Vec<Order>) -> StorageResult<()> {
        self.orders = orders;
        self.persist.save(slots::ORDERS, &self.orders)
    }

    pub fn login(&mut self, user: User) -> StorageResult<()> {
        self.set_user(Some(user))
    }

    pub fn logout(&mut self) -> StorageResult<()> {
        self.set_user(None)
    }

    pub fn add_product(&mut self, draft: ProductDraft, owner: &str) -> StorageResult<()> {
        let next = transitions::add_product(&self.products, draft, owner);
        self.set_products(next)
    }

    pub fn edit_product(&mut self, patch: &ProductPatch) -> StorageResult<()> {
        let next = transitions::edit_product(&self.products, patch);
        self.set_products(next)
    }

    pub fn delete_product(&mut self, id: Uuid) -> StorageResult<()> {
        let next = transitions::delete_product(&self.products, id);
        self.set_products(next)
    }

    pub fn add_to_cart(&mut self, product: &Product) -> StorageResult<()> {
        let next = transitions::add_to_cart(&self.cart, product);
        self.set_cart(next)
    }

    pub fn update_cart_qty(&mut self, id: Uuid, delta: i64) -> StorageResult<()> {
        let next = transitions::update_cart_qty(&self.cart, id, delta);
        self.set_cart(next)
    }

    pub fn remove_from_cart(&mut self, id: Uuid) -> StorageResult<()> {
        let next = transitions::remove_from_cart(&self.cart, id);
        self.set_cart(next)
    }

    /// Prepends the order and empties the cart. Both slots change in memory
    /// before either is written.
    ///
    /// Storage only ever holds the snapshot before or after the checkout: the
    /// emptied cart is written first so its space is free for the orders
    /// write, and if that write fails the previous cart is put back.
    pub fn commit_checkout(&mut self, order: Order) -> StorageResult<()> {
        let previous_cart = std::mem::take(&mut self.cart);
        self.orders.insert(0, order);

        self.persist.save(slots::CART, &self.cart)?;
        if let Err(err) = self.persist.save(slots::ORDERS, &self.orders) {
            if let Err(restore) = self.persist.save(slots::CART, &previous_cart) {
                tracing::warn!(error = %restore, "cart slot not restored after failed checkout write");
            }
            return Err(err);
        }
        Ok(())
    }

    fn write_user(&self) -> StorageResult<()> {
        match &self.user {
            Some(user) => self.persist.save(slots::USER, user),
            None => self.persist.remove(slots::USER),
        }
    }

    fn persist_all(&self) -> StorageResult<()> {
        let results = [
            self.write_user(),
            self.persist.save(slots::PRODUCTS, &self.products),
            self.persist.save(slots::CART, &self.cart),
            self.persist.save(slots::ORDERS, &self.orders),
        ];
        results.into_iter().collect()
    }
}
