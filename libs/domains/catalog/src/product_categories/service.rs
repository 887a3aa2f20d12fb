use std::sync::Arc;
use uuid::Uuid;

use super::repository::ProductCategoryRepository;
use crate::categories::Category;
use crate::error::CatalogResult;

#[derive(Clone)]
pub struct ProductCategoryService<R: ProductCategoryRepository> {
    repository: Arc<R>,
}

impl<R: ProductCategoryRepository> ProductCategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn get_categories(&self, product_id: Uuid) -> CatalogResult<Vec<Category>> {
        let categories = self.repository.list_for_product(product_id).await?;
        Ok(categories.into_iter().map(Category::from).collect())
    }

    /// Replaces the product's categories and returns the resulting set, ordered by slug
    pub async fn set_categories(
        &self,
        product_id: Uuid,
        category_ids: Vec<Uuid>,
    ) -> CatalogResult<Vec<Category>> {
        let assignment = self.repository.replace(product_id, category_ids).await?;

        if assignment.is_unchanged() {
            tracing::debug!(%product_id, "Product categories already up to date");
        }

        Ok(assignment
            .categories
            .into_iter()
            .map(Category::from)
            .collect())
    }
}
