use async_trait::async_trait;
use database::{AssociationError, reconcile};
use sea_orm::sea_query::Query;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use uuid::Uuid;

use super::entity;
use super::repository::{CategoryAssignment, ProductCategoryRepository};
use crate::categories::entity as categories;
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::offers::postgres::ensure_product;

#[derive(Clone)]
pub struct PgProductCategoryRepository {
    db: DatabaseConnection,
}

impl PgProductCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<AssociationError> for CatalogError {
    fn from(err: AssociationError) -> Self {
        match err {
            AssociationError::ParentNotFound(id) => {
                CatalogError::not_found(EntityKind::Product, id)
            }
            AssociationError::ChildrenNotFound(ids) => CatalogError::NotFoundMany {
                kind: EntityKind::Category,
                ids,
            },
            AssociationError::Conflict(detail) => CatalogError::Conflict(format!(
                "Categories of the product were changed concurrently: {detail}"
            )),
            AssociationError::Database(e) => CatalogError::Database(e),
        }
    }
}

async fn categories_of<C: ConnectionTrait>(
    conn: &C,
    product_id: Uuid,
) -> CatalogResult<Vec<categories::Model>> {
    let linked = Query::select()
        .column(entity::Column::CategoryId)
        .from(entity::Entity)
        .and_where(entity::Column::ProductId.eq(product_id))
        .to_owned();

    let categories = categories::Entity::find()
        .filter(categories::Column::Id.in_subquery(linked))
        .order_by_asc(categories::Column::Slug)
        .all(conn)
        .await?;

    Ok(categories)
}

#[async_trait]
impl ProductCategoryRepository for PgProductCategoryRepository {
    async fn list_for_product(&self, product_id: Uuid) -> CatalogResult<Vec<categories::Model>> {
        ensure_product(&self.db, product_id).await?;
        categories_of(&self.db, product_id).await
    }

    async fn replace(
        &self,
        product_id: Uuid,
        category_ids: Vec<Uuid>,
    ) -> CatalogResult<CategoryAssignment> {
        let txn = self.db.begin().await?;

        // Dropping `txn` on any error below rolls the whole replacement back
        let delta = reconcile::<entity::Entity, _>(&txn, product_id, &category_ids).await?;
        let categories = categories_of(&txn, product_id).await?;

        txn.commit().await?;

        if !delta.is_noop() {
            tracing::info!(
                %product_id,
                added = delta.to_add.len(),
                removed = delta.to_remove.len(),
                "Replaced product categories"
            );
        }

        Ok(CategoryAssignment {
            categories,
            added: delta.to_add,
            removed: delta.to_remove,
        })
    }
}
