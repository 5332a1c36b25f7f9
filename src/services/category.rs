use async_trait::async_trait;

use super::error::{translate_write_error, ServiceError, ServiceResult};
use crate::dtos::CategoryDto;
use crate::models::Category;
use crate::pagination::{Page, PageRequest};
use crate::repositories::CategoryRepository;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn find_all_paged(&self, request: PageRequest) -> ServiceResult<Page<CategoryDto>>;

    async fn find_by_id(&self, id: i64) -> ServiceResult<CategoryDto>;

    async fn insert(&self, dto: CategoryDto) -> ServiceResult<CategoryDto>;

    async fn update(&self, id: i64, dto: CategoryDto) -> ServiceResult<CategoryDto>;

    async fn delete(&self, id: i64) -> ServiceResult<()>;
}

pub struct CategoryServiceImpl<R: CategoryRepository> {
    repository: R,
}

impl<R: CategoryRepository> CategoryServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CategoryRepository> CategoryService for CategoryServiceImpl<R> {
    async fn find_all_paged(&self, request: PageRequest) -> ServiceResult<Page<CategoryDto>> {
        let page = self.repository.find_all_paged(request).await?;
        Ok(page.map(CategoryDto::from))
    }

    async fn find_by_id(&self, id: i64) -> ServiceResult<CategoryDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(CategoryDto::from)
            .ok_or_else(|| ServiceError::not_found("Category", id))
    }

    async fn insert(&self, dto: CategoryDto) -> ServiceResult<CategoryDto> {
        let mut category = Category { id: None, name: String::new() };
        dto.copy_to_entity(&mut category);

        let category = self
            .repository
            .save(category)
            .await
            .map_err(|e| translate_write_error(e, "Category", None))?;

        Ok(category.into())
    }

    async fn update(&self, id: i64, dto: CategoryDto) -> ServiceResult<CategoryDto> {
        let mut category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id))?;

        dto.copy_to_entity(&mut category);

        let category = self
            .repository
            .save(category)
            .await
            .map_err(|e| translate_write_error(e, "Category", Some(id)))?;

        Ok(category.into())
    }

    async fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(ServiceError::not_found("Category", id));
        }

        self.repository
            .delete_by_id(id)
            .await
            .map_err(|e| translate_write_error(e, "Category", Some(id)))
    }
}
