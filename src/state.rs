use std::sync::Arc;

use sqlx::SqlitePool;

use crate::repositories::{SqlxCategoryRepository, SqlxProductRepository};
use crate::services::{CategoryService, CategoryServiceImpl, ProductService, ProductServiceImpl};

/// Handlers only see the service interfaces, so tests can swap in stubs.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductService>,
    pub categories: Arc<dyn CategoryService>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self {
            products: Arc::new(ProductServiceImpl::new(SqlxProductRepository::new(db_pool.clone()))),
            categories: Arc::new(CategoryServiceImpl::new(SqlxCategoryRepository::new(db_pool))),
        }
    }
}
