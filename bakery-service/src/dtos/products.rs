//! Outward representation of catalog documents.
//!
//! Stored products may have been written by tools that skip validation, so
//! conversion never fails: every field has a coercion and a default.

use crate::services::id_to_string;
use bson::{Bson, Document};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductOut {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub image_url: Option<String>,
}

impl ProductOut {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.get("_id").map(id_to_string),
            title: text(doc.get("title")),
            description: text(doc.get("description")),
            price: doc.get("price").map_or(0.0, as_price),
            category: text(doc.get("category")),
            in_stock: doc.get("in_stock").map_or(true, truthy),
            image_url: match doc.get("image_url") {
                Some(Bson::String(url)) => Some(url.clone()),
                _ => None,
            },
        }
    }
}

impl From<&Document> for ProductOut {
    fn from(doc: &Document) -> Self {
        Self::from_document(doc)
    }
}

fn text(value: Option<&Bson>) -> String {
    match value {
        None | Some(Bson::Null) => String::new(),
        Some(Bson::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Coerce a stored price to a finite float; anything else is 0.
fn as_price(value: &Bson) -> f64 {
    let price = match value {
        Bson::Double(v) => *v,
        Bson::Int32(v) => f64::from(*v),
        Bson::Int64(v) => *v as f64,
        Bson::Decimal128(d) => d.to_string().parse().unwrap_or(0.0),
        Bson::Boolean(b) => f64::from(u8::from(*b)),
        Bson::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };

    if price.is_finite() {
        price
    } else {
        0.0
    }
}

fn truthy(value: &Bson) -> bool {
    match value {
        Bson::Boolean(b) => *b,
        Bson::Null | Bson::Undefined => false,
        Bson::Int32(v) => *v != 0,
        Bson::Int64(v) => *v != 0,
        Bson::Double(v) => *v != 0.0,
        Bson::String(s) => !s.is_empty(),
        Bson::Array(items) => !items.is_empty(),
        Bson::Document(d) => !d.is_empty(),
        _ => true,
    }
}
