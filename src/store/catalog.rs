use chrono::Duration;
use uuid::Uuid;

use crate::models::{Condition, Product, timestamp_now};

/// The catalog a fresh session starts with when nothing has been persisted yet.
pub fn demo_products() -> Vec<Product> {
    let now = timestamp_now();
    let seeded = [
        (
            "Laptop Bekas i5 8GB RAM",
            "Kondisi sangat baik, baterai masih awet. Termasuk charger.",
            3_500_000,
            Condition::LikeNew,
            "https://images.unsplash.com/photo-1653976499575-6aacb2644727?w=1600&auto=format&fit=crop&q=80",
            "seller1@example.com",
            Duration::days(1),
        ),
        (
            "Sepeda Lipat Bekas",
            "Ringan dan praktis, cocok untuk komuter. Ada bekas pemakaian.",
            1_200_000,
            Condition::GoodUsed,
            "https://images.unsplash.com/photo-1520962922320-2038eebab146?q=80&w=1200&auto=format&fit=crop",
            "seller2@example.com",
            Duration::days(2),
        ),
        (
            "Kamera Mirrorless",
            "Lensa kit 16-50mm, shutter count < 15k. Siap pakai.",
            2_800_000,
            Condition::GoodUsed,
            "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?q=80&w=1200&auto=format&fit=crop",
            "seller3@example.com",
            Duration::days(3),
        ),
        (
            "Ponsel Android",
            "RAM 6GB/128GB, layar mulus. Minus batre sedikit drop.",
            1_500_000,
            Condition::NeedsRepair,
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?q=80&w=1200&auto=format&fit=crop",
            "seller4@example.com",
            Duration::milliseconds(300_000_000),
        ),
    ];

    seeded
        .into_iter()
        .map(
            |(title, description, price, condition, image, owner, age)| Product {
                id: Uuid::new_v4(),
                title: title.to_string(),
                description: description.to_string(),
                price,
                condition,
                image: Some(image.to_string()),
                owner: owner.to_string(),
                created_at: now - age,
            },
        )
        .collect()
}
