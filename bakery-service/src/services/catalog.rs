use super::store::DocumentStore;
use crate::models::{Product, PRODUCT_COLLECTION};
use service_core::error::AppError;
use validator::Validate;

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    pub inserted: usize,
    pub already_seeded: bool,
}

/// The canonical demo catalog.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new(
            "Sourdough Loaf",
            "Crusty artisan sourdough with a tender crumb.",
            6.5,
            "Bread",
            Some("https://images.unsplash.com/photo-1542838132-92c53300491e?q=80&w=1200&auto=format&fit=crop"),
        ),
        Product::new(
            "Chocolate Croissant",
            "Flaky butter croissant filled with dark chocolate.",
            3.25,
            "Pastry",
            Some("https://images.unsplash.com/photo-1547106634-56dcd53ae883?q=80&w=1200&auto=format&fit=crop"),
        ),
        Product::new(
            "Blueberry Muffin",
            "Moist muffin packed with fresh blueberries.",
            2.95,
            "Muffin",
            Some("https://images.unsplash.com/photo-1509365465985-25d11c17e812?q=80&w=1200&auto=format&fit=crop"),
        ),
        Product::new(
            "Cinnamon Roll",
            "Swirled with cinnamon, topped with vanilla glaze.",
            3.5,
            "Pastry",
            Some("https://images.unsplash.com/photo-1606313564200-e75d5e30476e?q=80&w=1200&auto=format&fit=crop"),
        ),
    ]
}

/// Insert the demo catalog when the product collection is empty.
///
/// The count and the inserts are separate store calls, so two concurrent
/// calls on an empty catalog can both insert.
pub async fn seed_catalog(store: &dyn DocumentStore) -> Result<SeedOutcome, AppError> {
    let existing = store.count(PRODUCT_COLLECTION).await?;
    if existing > 0 {
        tracing::info!(existing, "Catalog already seeded");
        return Ok(SeedOutcome {
            inserted: 0,
            already_seeded: true,
        });
    }

    let products = demo_products();
    for product in &products {
        product.validate()?;
    }

    for product in &products {
        let id = store
            .insert(PRODUCT_COLLECTION, bson::to_document(product)?)
            .await?;
        tracing::debug!(id = %id, title = %product.title, "Seeded product");
    }

    tracing::info!(inserted = products.len(), "Seeded demo catalog");
    Ok(SeedOutcome {
        inserted: products.len(),
        already_seeded: false,
    })
}
