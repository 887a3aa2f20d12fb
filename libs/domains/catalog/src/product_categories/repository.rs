use async_trait::async_trait;
use uuid::Uuid;

use crate::categories::entity as categories;
use crate::error::CatalogResult;

/// Outcome of replacing a product's categories.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAssignment {
    /// The full resulting set, ordered by slug
    pub categories: Vec<categories::Model>,
    pub added: Vec<Uuid>,
    pub removed: Vec<Uuid>,
}

impl CategoryAssignment {
    /// Whether the request left the stored links as they were
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCategoryRepository: Send + Sync {
    /// Ordered by slug; fails with `NotFound` for an unknown product
    async fn list_for_product(&self, product_id: Uuid) -> CatalogResult<Vec<categories::Model>>;

    /// Makes `category_ids` (duplicates ignored) the product's exact category set.
    ///
    /// Fails with `NotFound` for an unknown product, `NotFoundMany` naming every
    /// unknown category, or `Conflict` when a concurrent write wins.
    async fn replace(
        &self,
        product_id: Uuid,
        category_ids: Vec<Uuid>,
    ) -> CatalogResult<CategoryAssignment>;
}
