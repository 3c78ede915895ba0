use sale_finds_hub::{
    config::AppConfig,
    models::{Product, Role, User},
    storage::{FileStorage, PersistentStore},
    store::{catalog::demo_products, slots},
};

// Writes the demo catalog (unless a readable one exists) and signs the session
// in as the admin, the only way the admin role ever appears.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let storage = FileStorage::open(&config.storage_dir, config.storage_quota)?;
    let store = PersistentStore::new(storage);

    seed_products(&store)?;
    let admin = ensure_admin(&store, "Admin", "admin@example.com")?;

    println!(
        "Seed completed in {}. Session user: {} (role=admin)",
        config.storage_dir.display(),
        admin.email
    );
    Ok(())
}

fn seed_products(store: &PersistentStore) -> anyhow::Result<()> {
    match store.try_load::<Vec<Product>>(slots::PRODUCTS) {
        Ok(Some(existing)) => {
            println!("Catalog already has {} products, left as is", existing.len());
        }
        Ok(None) | Err(_) => {
            let catalog = demo_products();
            store.save(slots::PRODUCTS, &catalog)?;
            println!("Seeded {} demo products", catalog.len());
        }
    }
    Ok(())
}

fn ensure_admin(store: &PersistentStore, name: &str, email: &str) -> anyhow::Result<User> {
    let admin = User {
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Admin,
    };
    store.save(slots::USER, &admin)?;
    Ok(admin)
}
