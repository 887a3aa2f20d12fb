use async_trait::async_trait;
use paging::{ListQuery, Page};
use uuid::Uuid;

use super::entity;
use super::models::CreateIngredient;
use crate::error::CatalogResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Fails with `Conflict` when the slug is taken
    async fn create(&self, input: CreateIngredient) -> CatalogResult<entity::Model>;

    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<entity::Model>>;

    /// Searches by latin name
    async fn list(&self, query: ListQuery) -> CatalogResult<Page<entity::Model>>;

    /// Returns whether a row was deleted
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;
}
