use async_trait::async_trait;
use uuid::Uuid;

use super::entity;
use super::models::CreateOffer;
use crate::error::CatalogResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Fails with `NotFound` for the product when it does not exist
    async fn create(&self, product_id: Uuid, input: CreateOffer) -> CatalogResult<entity::Model>;

    /// Cheapest first; fails with `NotFound` for an unknown product
    async fn list_for_product(&self, product_id: Uuid) -> CatalogResult<Vec<entity::Model>>;
}
