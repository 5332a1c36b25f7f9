use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::push_page_clause;
use crate::models::Category;
use crate::pagination::{Page, PageRequest};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn save(&self, category: Category) -> Result<Category, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, sqlx::Error>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// Fails with `sqlx::Error::RowNotFound` when there is no such row, and
    /// with a foreign-key violation while any product still references it.
    async fn delete_by_id(&self, id: i64) -> Result<(), sqlx::Error>;

    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<Category>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct SqlxCategoryRepository {
    pool: SqlitePool,
}

impl SqlxCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqlxCategoryRepository {
    async fn save(&self, mut category: Category) -> Result<Category, sqlx::Error> {
        match category.id {
            None => {
                let id = sqlx::query("INSERT INTO category (name) VALUES (?)")
                    .bind(&category.name)
                    .execute(&self.pool)
                    .await?
                    .last_insert_rowid();

                tracing::info!(category_id = id, "Created category");
                category.id = Some(id);
            }
            Some(id) => {
                let result = sqlx::query("UPDATE category SET name = ? WHERE id = ?")
                    .bind(&category.name)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;

                if result.rows_affected() == 0 {
                    return Err(sqlx::Error::RowNotFound);
                }
                tracing::info!(category_id = id, "Updated category");
            }
        }

        Ok(category)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM category WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM category WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        tracing::info!(category_id = id, "Deleted category");
        Ok(())
    }

    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<Category>, sqlx::Error> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM category")
            .fetch_one(&self.pool)
            .await?;

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT id, name FROM category");
        push_page_clause(&mut query, &request);

        let categories: Vec<Category> = query.build_query_as().fetch_all(&self.pool).await?;

        Ok(Page::new(categories, &request, total))
    }
}
