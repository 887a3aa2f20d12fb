use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use super::entity;
use super::models::CreateOffer;
use super::repository::OfferRepository;
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::products::entity as products;

#[derive(Clone)]
pub struct PgOfferRepository {
    db: DatabaseConnection,
}

impl PgOfferRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Fails with `NotFound` unless the product row exists.
pub(crate) async fn ensure_product<C: ConnectionTrait>(
    conn: &C,
    product_id: Uuid,
) -> CatalogResult<()> {
    let found: Option<Uuid> = products::Entity::find()
        .select_only()
        .column(products::Column::Id)
        .filter(products::Column::Id.eq(product_id))
        .into_tuple()
        .one(conn)
        .await?;

    found
        .map(|_| ())
        .ok_or(CatalogError::not_found(EntityKind::Product, product_id))
}

#[async_trait]
impl OfferRepository for PgOfferRepository {
    async fn create(&self, product_id: Uuid, input: CreateOffer) -> CatalogResult<entity::Model> {
        let model = entity::ActiveModel::for_product(product_id, input)
            .insert(&self.db)
            .await
            .map_err(|e| CatalogError::missing_reference(e, EntityKind::Product, product_id))?;

        tracing::info!(offer_id = %model.id, %product_id, price_pln = model.price_pln, "Created offer");
        Ok(model)
    }

    async fn list_for_product(&self, product_id: Uuid) -> CatalogResult<Vec<entity::Model>> {
        ensure_product(&self.db, product_id).await?;

        let offers = entity::Entity::find()
            .filter(entity::Column::ProductId.eq(product_id))
            .order_by_asc(entity::Column::PricePln)
            .all(&self.db)
            .await?;

        Ok(offers)
    }
}
