use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;

use super::push_page_clause;
use crate::models::{Category, Product};
use crate::pagination::{Page, PageRequest};

/// Persistence contract for products, keyed by numeric id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert when `product.id` is `None`, otherwise overwrite that row.
    /// The category links are replaced in the same transaction.
    async fn save(&self, product: Product) -> Result<Product, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// Fails with `sqlx::Error::RowNotFound` when there is no such row.
    async fn delete_by_id(&self, id: i64) -> Result<(), sqlx::Error>;

    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<Product>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct SqlxProductRepository {
    pool: SqlitePool,
}

impl SqlxProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn find_categories(&self, product_id: i64) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT c.id, c.name
             FROM category c
             JOIN product_category pc ON pc.category_id = c.id
             WHERE pc.product_id = ?
             ORDER BY c.id",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
    }

    /// One query for every product on a page instead of one per product.
    async fn find_categories_for(
        &self,
        product_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Category>>, sqlx::Error> {
        let mut by_product: HashMap<i64, Vec<Category>> = HashMap::new();
        if product_ids.is_empty() {
            return Ok(by_product);
        }

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT pc.product_id, c.id, c.name
             FROM category c
             JOIN product_category pc ON pc.category_id = c.id
             WHERE pc.product_id IN (",
        );
        let mut ids = query.separated(", ");
        for id in product_ids {
            ids.push_bind(*id);
        }
        query.push(") ORDER BY pc.product_id, c.id");

        let rows: Vec<(i64, i64, String)> = query.build_query_as().fetch_all(&self.pool).await?;
        for (product_id, id, name) in rows {
            by_product
                .entry(product_id)
                .or_default()
                .push(Category::new(id, name));
        }

        Ok(by_product)
    }
}

#[async_trait]
impl ProductRepository for SqlxProductRepository {
    async fn save(&self, mut product: Product) -> Result<Product, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let id = match product.id {
            None => {
                sqlx::query(
                    "INSERT INTO product (name, description, price, image_url, date)
                     VALUES (?, ?, ?, ?, ?)",
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(&product.image_url)
                .bind(product.date)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid()
            }
            Some(id) => {
                let result = sqlx::query(
                    "UPDATE product
                     SET name = ?, description = ?, price = ?, image_url = ?, date = ?
                     WHERE id = ?",
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(&product.image_url)
                .bind(product.date)
                .bind(id)
                .execute(&mut *tx)
                .await?;

                if result.rows_affected() == 0 {
                    return Err(sqlx::Error::RowNotFound);
                }

                sqlx::query("DELETE FROM product_category WHERE product_id = ?")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                id
            }
        };

        for category in &product.categories {
            // OR IGNORE drops duplicate links; foreign-key failures still surface.
            sqlx::query("INSERT OR IGNORE INTO product_category (product_id, category_id) VALUES (?, ?)")
                .bind(id)
                .bind(category.id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        if product.id.is_none() {
            tracing::info!(product_id = id, "Created product");
        } else {
            tracing::info!(product_id = id, "Updated product");
        }

        product.id = Some(id);
        product.categories = self.find_categories(id).await?;
        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, image_url, date FROM product WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match product {
            Some(mut product) => {
                product.categories = self.find_categories(id).await?;
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM product WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM product WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }

    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<Product>, sqlx::Error> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await?;

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, name, description, price, image_url, date FROM product",
        );
        push_page_clause(&mut query, &request);

        let mut products: Vec<Product> = query.build_query_as().fetch_all(&self.pool).await?;

        let ids: Vec<i64> = products.iter().filter_map(|p| p.id).collect();
        let mut categories = self.find_categories_for(&ids).await?;
        for product in &mut products {
            if let Some(id) = product.id {
                product.categories = categories.remove(&id).unwrap_or_default();
            }
        }

        Ok(Page::new(products, &request, total))
    }
}
