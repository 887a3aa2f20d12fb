use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::models::{CreateOffer, Offer};
use super::repository::OfferRepository;
use crate::error::CatalogResult;

#[derive(Clone)]
pub struct OfferService<R: OfferRepository> {
    repository: Arc<R>,
}

impl<R: OfferRepository> OfferService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create_offer(&self, product_id: Uuid, input: CreateOffer) -> CatalogResult<Offer> {
        input.validate()?;
        let model = self.repository.create(product_id, input).await?;
        Ok(model.into())
    }

    pub async fn list_offers(&self, product_id: Uuid) -> CatalogResult<Vec<Offer>> {
        let offers = self.repository.list_for_product(product_id).await?;
        Ok(offers.into_iter().map(Offer::from).collect())
    }
}
