use async_trait::async_trait;
use database::BaseRepository;
use paging::{ListQuery, Page, find_page, search};
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use super::entity;
use super::models::CreateCategory;
use super::repository::CategoryRepository;
use crate::error::{CatalogError, CatalogResult};

#[derive(Clone)]
pub struct PgCategoryRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, input: CreateCategory) -> CatalogResult<entity::Model> {
        let slug = input.slug.clone();

        let model = self
            .base
            .insert(entity::ActiveModel::from(input))
            .await
            .map_err(|e| {
                CatalogError::duplicate(e, || format!("Category with slug \"{slug}\" already exists"))
            })?;

        tracing::info!(category_id = %model.id, "Created category");
        Ok(model)
    }

    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<entity::Model>> {
        Ok(self.base.find_by_id(id).await?)
    }

    async fn list(&self, query: ListQuery) -> CatalogResult<Page<entity::Model>> {
        let select = search::apply(
            entity::Entity::find(),
            entity::Column::Name,
            query.search.as_deref(),
        );

        Ok(find_page(self.base.db(), select, query.paging, query.sort).await?)
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let deleted = self.base.delete_by_id(id).await? > 0;
        if deleted {
            tracing::info!(category_id = %id, "Deleted category");
        }
        Ok(deleted)
    }
}
