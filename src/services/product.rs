use async_trait::async_trait;

use super::error::{translate_write_error, ServiceError, ServiceResult};
use crate::dtos::ProductDto;
use crate::pagination::{Page, PageRequest};
use crate::repositories::ProductRepository;

/// What the HTTP layer needs from the product catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn find_all_paged(&self, request: PageRequest) -> ServiceResult<Page<ProductDto>>;

    async fn find_by_id(&self, id: i64) -> ServiceResult<ProductDto>;

    async fn insert(&self, dto: ProductDto) -> ServiceResult<ProductDto>;

    async fn update(&self, id: i64, dto: ProductDto) -> ServiceResult<ProductDto>;

    async fn delete(&self, id: i64) -> ServiceResult<()>;
}

pub struct ProductServiceImpl<R: ProductRepository> {
    repository: R,
}

impl<R: ProductRepository> ProductServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn ensure_category_ids(dto: &ProductDto) -> ServiceResult<()> {
    if dto.categories.iter().any(|c| c.id.is_none()) {
        return Err(ServiceError::Validation("Category id is required".to_string()));
    }
    Ok(())
}

#[async_trait]
impl<R: ProductRepository> ProductService for ProductServiceImpl<R> {
    async fn find_all_paged(&self, request: PageRequest) -> ServiceResult<Page<ProductDto>> {
        let page = self.repository.find_all_paged(request).await?;
        Ok(page.map(ProductDto::from))
    }

    async fn find_by_id(&self, id: i64) -> ServiceResult<ProductDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ProductDto::from)
            .ok_or_else(|| ServiceError::not_found("Product", id))
    }

    async fn insert(&self, dto: ProductDto) -> ServiceResult<ProductDto> {
        ensure_category_ids(&dto)?;

        let product = self
            .repository
            .save(dto.to_new_entity())
            .await
            .map_err(|e| translate_write_error(e, "Product", None))?;

        Ok(product.into())
    }

    async fn update(&self, id: i64, dto: ProductDto) -> ServiceResult<ProductDto> {
        ensure_category_ids(&dto)?;

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))?;

        dto.copy_to_entity(&mut product);

        let product = self
            .repository
            .save(product)
            .await
            .map_err(|e| translate_write_error(e, "Product", Some(id)))?;

        Ok(product.into())
    }

    async fn delete(&self, id: i64) -> ServiceResult<()> {
        // Checked first so a missing row is never reported as a constraint failure.
        if !self.repository.exists_by_id(id).await? {
            return Err(ServiceError::not_found("Product", id));
        }

        self.repository
            .delete_by_id(id)
            .await
            .map_err(|e| translate_write_error(e, "Product", Some(id)))
    }
}
