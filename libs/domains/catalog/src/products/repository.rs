use async_trait::async_trait;
use paging::{ListQuery, Page};
use uuid::Uuid;

use super::entity;
use super::models::CreateProduct;
use crate::error::CatalogResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fails with `NotFound` for the brand when `brand_id` references nothing
    async fn create(&self, input: CreateProduct) -> CatalogResult<entity::Model>;

    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<entity::Model>>;

    /// Searches by name; `price-*` sorts order by the product's cheapest offer
    async fn list(&self, query: ListQuery) -> CatalogResult<Page<entity::Model>>;

    /// Offers, category links and favorites of the product are deleted with it
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;
}
