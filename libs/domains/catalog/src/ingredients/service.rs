use paging::{ListParams, Page};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::models::{INGREDIENT_SORTS, Ingredient, CreateIngredient};
use super::repository::IngredientRepository;
use crate::error::{CatalogError, CatalogResult, EntityKind};

/// Service layer for ingredients
#[derive(Clone)]
pub struct IngredientService<R: IngredientRepository> {
    repository: Arc<R>,
}

impl<R: IngredientRepository> IngredientService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_ingredients(&self, params: ListParams) -> CatalogResult<Page<Ingredient>> {
        let query = params.parse(&INGREDIENT_SORTS)?;
        let page = self.repository.list(query).await?;
        Ok(page.map(Ingredient::from))
    }

    pub async fn create_ingredient(&self, input: CreateIngredient) -> CatalogResult<Ingredient> {
        input.validate()?;
        let model = self.repository.create(input).await?;
        Ok(model.into())
    }

    pub async fn get_ingredient(&self, id: Uuid) -> CatalogResult<Ingredient> {
        self.repository
            .get_by_id(id)
            .await?
            .map(Ingredient::from)
            .ok_or(CatalogError::not_found(EntityKind::Ingredient, id))
    }

    pub async fn delete_ingredient(&self, id: Uuid) -> CatalogResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CatalogError::not_found(EntityKind::Ingredient, id));
        }
        Ok(())
    }
}
