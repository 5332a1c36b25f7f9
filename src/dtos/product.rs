// src/dtos/product.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::category::CategoryDto;
use crate::models::{Category, Product};

/// Fields `GET /products?sort=` accepts, mapped to their sort expressions.
/// Dates are compared as instants, not as stored text.
pub const SORT_FIELDS: &[(&str, &str)] = &[
    ("id", "id"),
    ("name", "name"),
    ("price", "price"),
    ("date", "julianday(date)"),
    ("imageUrl", "image_url"),
    ("image_url", "image_url"),
];

/// Wire shape of a product. `id` is ignored on insert and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Option<i64>,
    #[validate(
        length(min = 5, max = 60, message = "Name must be between 5 and 60 characters"),
        custom(function = "super::not_blank")
    )]
    pub name: String,
    #[validate(custom(function = "super::not_blank"))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be positive"))]
    pub price: f64,
    pub image_url: String,
    #[validate(custom(function = "super::not_in_future"))]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
}

impl ProductDto {
    /// Overwrite every mutable field of `entity`; the id is left alone.
    pub fn copy_to_entity(&self, entity: &mut Product) {
        entity.name = self.name.trim().to_string();
        entity.description = self.description.clone();
        entity.price = self.price;
        entity.image_url = self.image_url.clone();
        entity.date = self.date;
        entity.categories = self
            .categories
            .iter()
            .map(|c| Category { id: c.id, name: c.name.clone() })
            .collect();
    }

    /// A fresh, unsaved entity carrying this DTO's fields.
    pub fn to_new_entity(&self) -> Product {
        let mut product = Product {
            id: None,
            name: String::new(),
            description: String::new(),
            price: 0.0,
            image_url: String::new(),
            date: self.date,
            categories: Vec::new(),
        };
        self.copy_to_entity(&mut product);
        product
    }
}

// Convert from Model to DTO
impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            date: product.date,
            categories: product.categories.into_iter().map(CategoryDto::from).collect(),
        }
    }
}
