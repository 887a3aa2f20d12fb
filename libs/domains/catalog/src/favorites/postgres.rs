use async_trait::async_trait;
use paging::{ListQuery, Page, find_page, search};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Query;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr};
use uuid::Uuid;

use super::entity;
use super::repository::FavoriteProductRepository;
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::products::entity as products;
use crate::products::postgres::listing_select;

#[derive(Clone)]
pub struct PgFavoriteProductRepository {
    db: DatabaseConnection,
}

impl PgFavoriteProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteProductRepository for PgFavoriteProductRepository {
    async fn add(&self, user_id: Uuid, product_id: Uuid) -> CatalogResult<()> {
        let favorite = entity::ActiveModel {
            user_id: Set(user_id),
            product_id: Set(product_id),
        };

        match entity::Entity::insert(favorite)
            .exec_without_returning(&self.db)
            .await
        {
            Ok(_) => {
                tracing::info!(%user_id, %product_id, "Added favorite product");
                Ok(())
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::debug!(%user_id, %product_id, "Product already a favorite");
                Ok(())
            }
            Err(e) => Err(CatalogError::missing_reference(
                e,
                EntityKind::Product,
                product_id,
            )),
        }
    }

    async fn remove(&self, user_id: Uuid, product_id: Uuid) -> CatalogResult<bool> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::UserId.eq(user_id))
            .filter(entity::Column::ProductId.eq(product_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn list(&self, user_id: Uuid, query: ListQuery) -> CatalogResult<Page<products::Model>> {
        let favorites = Query::select()
            .column(entity::Column::ProductId)
            .from(entity::Entity)
            .and_where(entity::Column::UserId.eq(user_id))
            .to_owned();

        let select = search::apply(
            listing_select().filter(products::Column::Id.in_subquery(favorites)),
            products::Column::Name,
            query.search.as_deref(),
        );

        Ok(find_page(&self.db, select, query.paging, query.sort).await?)
    }
}
