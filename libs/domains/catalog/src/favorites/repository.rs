use async_trait::async_trait;
use paging::{ListQuery, Page};
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::products::entity as products;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteProductRepository: Send + Sync {
    /// Idempotent; fails with `NotFound` for an unknown product
    async fn add(&self, user_id: Uuid, product_id: Uuid) -> CatalogResult<()>;

    /// Returns whether the pair existed
    async fn remove(&self, user_id: Uuid, product_id: Uuid) -> CatalogResult<bool>;

    /// The user's favorite products, searched and sorted like the product listing
    async fn list(&self, user_id: Uuid, query: ListQuery) -> CatalogResult<Page<products::Model>>;
}
