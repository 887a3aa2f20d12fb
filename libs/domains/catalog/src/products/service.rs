use paging::{ListParams, Page};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::models::{CreateProduct, PRODUCT_SORTS, Product};
use super::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult, EntityKind};

/// Service layer for products
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_products(&self, params: ListParams) -> CatalogResult<Page<Product>> {
        let query = params.parse(&PRODUCT_SORTS)?;
        let page = self.repository.list(query).await?;
        Ok(page.map(Product::from))
    }

    pub async fn create_product(&self, input: CreateProduct) -> CatalogResult<Product> {
        input.validate()?;
        let model = self.repository.create(input).await?;
        Ok(model.into())
    }

    pub async fn get_product(&self, id: Uuid) -> CatalogResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .map(Product::from)
            .ok_or(CatalogError::not_found(EntityKind::Product, id))
    }

    pub async fn delete_product(&self, id: Uuid) -> CatalogResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CatalogError::not_found(EntityKind::Product, id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::entity;
    use crate::products::repository::MockProductRepository;
    use paging::SortDirection;

    fn product(name: &str) -> entity::Model {
        entity::Model {
            id: Uuid::new_v4(),
            slug: name.to_lowercase().replace(' ', "-"),
            name: Some(name.to_string()),
            mass_kilograms: None,
            volume_liters: Some(1.0),
            brand_id: None,
        }
    }

    #[tokio::test]
    async fn test_price_sort_targets_lowest_offer_join() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .withf(|query| {
                query.sort.is_some_and(|s| {
                    s.field.table == "offer"
                        && s.field.column == "price_pln"
                        && s.direction == SortDirection::Asc
                })
            })
            .returning(|query| {
                Ok(paging::paginate(
                    vec![product("Oat Milk"), product("Soy Milk")],
                    query.paging,
                ))
            });

        let service = ProductService::new(repo);
        let page = service
            .list_products(ListParams {
                sort: Some("price-asc".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.meta.page_items_count, 2);
        assert_eq!(page.items[0].name.as_deref(), Some("Oat Milk"));
    }

    #[tokio::test]
    async fn test_unknown_brand_surfaces_as_not_found() {
        let brand_id = Uuid::new_v4();
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .returning(move |_| Err(CatalogError::not_found(EntityKind::Brand, brand_id)));

        let service = ProductService::new(repo);
        let err = service
            .create_product(CreateProduct {
                slug: "oat-milk".into(),
                brand_id: Some(brand_id),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Brand with id \"{brand_id}\" not found")
        );
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let err = service.get_product(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::NotFound {
                kind: EntityKind::Product,
                ..
            }
        ));
    }
}
