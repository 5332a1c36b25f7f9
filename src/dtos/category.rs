use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Category;

/// Fields `GET /categories?sort=` accepts, mapped to their columns.
pub const SORT_FIELDS: &[(&str, &str)] = &[("id", "id"), ("name", "name")];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CategoryDto {
    pub id: Option<i64>,
    // Products may reference categories by id alone.
    #[serde(default)]
    #[validate(
        length(max = 60, message = "Category name must be at most 60 characters"),
        custom(function = "super::not_blank")
    )]
    pub name: String,
}

impl CategoryDto {
    pub fn copy_to_entity(&self, entity: &mut Category) {
        entity.name = self.name.trim().to_string();
    }
}

// Convert from Model to DTO
impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self { id: category.id, name: category.name }
    }
}
