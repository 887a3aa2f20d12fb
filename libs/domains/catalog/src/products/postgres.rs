use async_trait::async_trait;
use database::BaseRepository;
use paging::{ListQuery, Page, find_page, search};
use sea_orm::sea_query::{Alias, Expr, ExprTrait, Func, JoinType, Query, SelectStatement};
use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect, Select};
use uuid::Uuid;

use super::entity;
use super::models::{CreateProduct, OFFER_ALIAS};
use super::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::offers::entity as offers;

#[derive(Clone)]
pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

/// `SELECT product_id, MIN(price_pln) AS price_pln FROM offers GROUP BY product_id`
fn lowest_offer() -> SelectStatement {
    Query::select()
        .column(offers::Column::ProductId)
        .expr_as(
            Func::min(Expr::col(offers::Column::PricePln)),
            Alias::new("price_pln"),
        )
        .from(offers::Entity)
        .group_by_col(offers::Column::ProductId)
        .to_owned()
}

/// Products left-joined to their cheapest offer, one row per product.
///
/// Every product listing starts here so the `price-*` sort tokens can address
/// `offer.price_pln`.
pub(crate) fn listing_select() -> Select<entity::Entity> {
    let mut select = entity::Entity::find();
    QuerySelect::query(&mut select).join_subquery(
        JoinType::LeftJoin,
        lowest_offer(),
        Alias::new(OFFER_ALIAS),
        Expr::col((Alias::new(OFFER_ALIAS), offers::Column::ProductId))
            .equals((entity::Entity, entity::Column::Id)),
    );
    select
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> CatalogResult<entity::Model> {
        let brand_id = input.brand_id;

        let model = self
            .base
            .insert(entity::ActiveModel::from(input))
            .await
            .map_err(|e| match brand_id {
                Some(brand_id) => CatalogError::missing_reference(e, EntityKind::Brand, brand_id),
                None => CatalogError::Database(e),
            })?;

        tracing::info!(product_id = %model.id, brand_id = ?model.brand_id, "Created product");
        Ok(model)
    }

    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<entity::Model>> {
        Ok(self.base.find_by_id(id).await?)
    }

    async fn list(&self, query: ListQuery) -> CatalogResult<Page<entity::Model>> {
        let select = search::apply(
            listing_select(),
            entity::Column::Name,
            query.search.as_deref(),
        );

        Ok(find_page(self.base.db(), select, query.paging, query.sort).await?)
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let deleted = self.base.delete_by_id(id).await? > 0;
        if deleted {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, QueryTrait};

    #[test]
    fn test_listing_select_joins_lowest_offer_once_per_product() {
        let sql = listing_select().build(DatabaseBackend::Postgres).to_string();

        assert!(sql.contains("LEFT JOIN (SELECT"));
        assert!(sql.contains("MIN(\"price_pln\")"));
        assert!(sql.contains("GROUP BY \"product_id\""));
        assert!(sql.contains("AS \"offer\" ON \"offer\".\"product_id\" = \"products\".\"id\""));
    }
}
