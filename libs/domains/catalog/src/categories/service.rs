use paging::{ListParams, Page};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::models::{CATEGORY_SORTS, Category, CreateCategory};
use super::repository::CategoryRepository;
use crate::error::{CatalogError, CatalogResult, EntityKind};

/// Service layer for categories
#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_categories(&self, params: ListParams) -> CatalogResult<Page<Category>> {
        let query = params.parse(&CATEGORY_SORTS)?;
        let page = self.repository.list(query).await?;
        Ok(page.map(Category::from))
    }

    pub async fn create_category(&self, input: CreateCategory) -> CatalogResult<Category> {
        input.validate()?;
        let model = self.repository.create(input).await?;
        Ok(model.into())
    }

    pub async fn get_category(&self, id: Uuid) -> CatalogResult<Category> {
        self.repository
            .get_by_id(id)
            .await?
            .map(Category::from)
            .ok_or(CatalogError::not_found(EntityKind::Category, id))
    }

    pub async fn delete_category(&self, id: Uuid) -> CatalogResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CatalogError::not_found(EntityKind::Category, id));
        }
        Ok(())
    }
}
