use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::category::Category;

/// A `product` row plus its eagerly loaded categories.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub date: DateTime<Utc>,
    #[sqlx(skip)]
    pub categories: Vec<Category>,
}
