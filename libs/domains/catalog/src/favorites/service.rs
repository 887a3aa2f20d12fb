use paging::{ListParams, Page};
use std::sync::Arc;
use uuid::Uuid;

use super::directory::UserDirectory;
use super::repository::FavoriteProductRepository;
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::products::{PRODUCT_SORTS, Product};

/// Favorites are keyed by users of the users service; every operation first
/// confirms the user exists there.
pub struct FavoriteProductService<R: FavoriteProductRepository, U: UserDirectory> {
    repository: Arc<R>,
    users: Arc<U>,
}

impl<R: FavoriteProductRepository, U: UserDirectory> FavoriteProductService<R, U> {
    pub fn new(repository: R, users: U) -> Self {
        Self {
            repository: Arc::new(repository),
            users: Arc::new(users),
        }
    }

    pub async fn add_favorite(&self, user_id: Uuid, product_id: Uuid) -> CatalogResult<()> {
        self.users.resolve_user(user_id).await?;
        self.repository.add(user_id, product_id).await
    }

    pub async fn remove_favorite(&self, user_id: Uuid, product_id: Uuid) -> CatalogResult<()> {
        self.users.resolve_user(user_id).await?;
        if !self.repository.remove(user_id, product_id).await? {
            return Err(CatalogError::not_found(EntityKind::Product, product_id));
        }
        Ok(())
    }

    pub async fn list_favorites(
        &self,
        user_id: Uuid,
        params: ListParams,
    ) -> CatalogResult<Page<Product>> {
        let query = params.parse(&PRODUCT_SORTS)?;
        self.users.resolve_user(user_id).await?;

        let page = self.repository.list(user_id, query).await?;
        Ok(page.map(Product::from))
    }
}
