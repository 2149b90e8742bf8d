//! Product Aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::category::Category;
use crate::domain::value_objects::ProductId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: Category,
    pub image: String,
    pub stock: u32,
    pub rating: f64,
    #[serde(rename = "reviews")]
    pub review_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a product, as submitted by the admin form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductDraft {
    #[validate(custom = "not_blank")]
    pub name: String,
    #[validate(custom = "not_blank")]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom = "positive_price")]
    pub price: Decimal,
    pub category: Category,
    #[validate(custom = "not_blank")]
    pub image: String,
    pub stock: u32,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() { return Err(ValidationError::new("blank")); }
    Ok(())
}

fn positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO { return Err(ValidationError::new("non_positive_price")); }
    Ok(())
}

impl Product {
    /// Builds a fresh catalog record. Rating and review count start at zero.
    pub fn create(draft: ProductDraft) -> Self {
        let now = Utc::now();
        Self {
            id: ProductId::generate(), name: draft.name, description: draft.description,
            price: draft.price, category: draft.category, image: draft.image, stock: draft.stock,
            rating: 0.0, review_count: 0, created_at: now, updated_at: now,
        }
    }

    /// Overwrites the editable fields, keeping id, rating, reviews and creation time.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.category = draft.category;
        self.image = draft.image;
        self.stock = draft.stock;
        self.touch();
    }

    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(), description: self.description.clone(), price: self.price,
            category: self.category, image: self.image.clone(), stock: self.stock,
        }
    }

    pub fn is_in_stock(&self) -> bool { self.stock > 0 }

    fn touch(&mut self) { self.updated_at = Utc::now(); }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Yoga Mat".into(), description: "Non-slip".into(), price: Decimal::new(4999, 2),
            category: Category::Sports, image: "https://img/yoga.jpg".into(), stock: 30,
        }
    }

    #[test]
    fn test_product_create() {
        let p = Product::create(draft());
        assert_eq!(p.name, "Yoga Mat");
        assert_eq!(p.rating, 0.0);
        assert_eq!(p.review_count, 0);
        assert_eq!(p.created_at, p.updated_at);
        assert!(p.is_in_stock());
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut p = Product::create(draft());
        let (id, created) = (p.id.clone(), p.created_at);
        p.apply(ProductDraft { stock: 0, price: Decimal::new(3999, 2), ..draft() });
        assert_eq!(p.id, id);
        assert_eq!(p.created_at, created);
        assert!(p.updated_at >= created);
        assert_eq!(p.price, Decimal::new(3999, 2));
        assert!(!p.is_in_stock());
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft().validate().is_ok());
        let errors = ProductDraft { name: "   ".into(), price: Decimal::ZERO, ..draft() }.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
        assert!(!fields.contains_key("description"));
    }

    #[test]
    fn test_storage_layout() {
        let json = r#"{"id":"p1","name":"Car Phone Mount","description":"Universal","price":19.99,
            "category":"automotive","image":"https://img/mount.jpg","stock":60,"rating":4.1,"reviews":95,
            "createdAt":"2024-01-11T12:00:00Z","updatedAt":"2024-01-11T12:00:00Z"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.price, Decimal::new(1999, 2));
        assert_eq!(p.review_count, 95);
        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back["reviews"], 95);
        assert_eq!(back["category"], "automotive");
        assert!(back.get("createdAt").is_some());
    }
}
