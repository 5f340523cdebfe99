use serde::{Deserialize, Serialize};
use validator::Validate;

/// A catalog entry as accepted for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Product {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    pub description: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[validate(url(message = "Image URL must be a valid URL"))]
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        image_url: Option<&str>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price,
            category: category.into(),
            in_stock: true,
            image_url: image_url.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let product: Product = serde_json::from_str(
            r#"{"title": "Baguette", "description": "Long and crisp", "price": 2.5}"#,
        )
        .unwrap();

        assert_eq!(product.category, "");
        assert!(product.in_stock);
        assert_eq!(product.image_url, None);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let product = Product::new("", "No name", 1.0, "Bread", None);
        let errors = product.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let product = Product::new("Rye", "Dark loaf", -0.5, "Bread", None);
        let errors = product.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn malformed_image_url_is_rejected() {
        let product = Product::new("Rye", "Dark loaf", 4.0, "Bread", Some("not a url"));
        let errors = product.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("image_url"));
    }
}
