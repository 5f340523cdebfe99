pub mod contact;
pub mod product;

pub use contact::ContactMessage;
pub use product::Product;

/// Collection holding the product catalog.
pub const PRODUCT_COLLECTION: &str = "product";

/// Collection holding submitted contact-form messages.
pub const CONTACT_COLLECTION: &str = "contactmessage";
