use paging::{ListParams, Page};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::models::{BRAND_SORTS, Brand, CreateBrand};
use super::repository::BrandRepository;
use crate::error::{CatalogError, CatalogResult, EntityKind};

/// Service layer for brands
#[derive(Clone)]
pub struct BrandService<R: BrandRepository> {
    repository: Arc<R>,
}

impl<R: BrandRepository> BrandService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_brands(&self, params: ListParams) -> CatalogResult<Page<Brand>> {
        let query = params.parse(&BRAND_SORTS)?;
        let page = self.repository.list(query).await?;
        Ok(page.map(Brand::from))
    }

    pub async fn create_brand(&self, input: CreateBrand) -> CatalogResult<Brand> {
        input.validate()?;
        let model = self.repository.create(input).await?;
        Ok(model.into())
    }

    pub async fn get_brand(&self, id: Uuid) -> CatalogResult<Brand> {
        self.repository
            .get_by_id(id)
            .await?
            .map(Brand::from)
            .ok_or(CatalogError::not_found(EntityKind::Brand, id))
    }

    pub async fn delete_brand(&self, id: Uuid) -> CatalogResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CatalogError::not_found(EntityKind::Brand, id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brands::entity;
    use crate::brands::repository::MockBrandRepository;
    use mockall::predicate::eq;
    use paging::{PagingOptions, SortDirection};

    fn acme() -> entity::Model {
        entity::Model {
            id: Uuid::new_v4(),
            slug: "acme".into(),
            name: "Acme".into(),
        }
    }

    #[tokio::test]
    async fn test_list_resolves_sort_token_before_querying() {
        let mut repo = MockBrandRepository::new();
        repo.expect_list()
            .withf(|query| {
                query.sort.is_some_and(|s| {
                    s.field.column == "name" && s.direction == SortDirection::Desc
                }) && query.paging == PagingOptions::new(5, 20).unwrap()
                    && query.search.as_deref() == Some("ac")
            })
            .times(1)
            .returning(|query| Ok(paging::paginate(vec![acme()], query.paging)));

        let service = BrandService::new(repo);
        let page = service
            .list_brands(ListParams {
                skip: Some(5),
                take: Some(20),
                search: Some("ac".into()),
                sort: Some("name-desc".into()),
            })
            .await
            .unwrap();

        assert_eq!(page.meta.total_items_count, 1);
        assert_eq!(page.meta.page_items_count, 0);
    }

    #[tokio::test]
    async fn test_unknown_sort_never_reaches_repository() {
        let mut repo = MockBrandRepository::new();
        repo.expect_list().never();

        let service = BrandService::new(repo);
        let err = service
            .list_brands(ListParams {
                sort: Some("price-asc".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_slug() {
        let mut repo = MockBrandRepository::new();
        repo.expect_create().never();

        let service = BrandService::new(repo);
        let err = service
            .create_brand(CreateBrand {
                slug: "Not A Slug".into(),
                name: "Acme".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_missing_brand_is_not_found() {
        let id = Uuid::new_v4();
        let mut repo = MockBrandRepository::new();
        repo.expect_get_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = BrandService::new(repo);
        let err = service.get_brand(id).await.unwrap_err();

        assert_eq!(err.to_string(), format!("Brand with id \"{id}\" not found"));
    }

    #[tokio::test]
    async fn test_delete_nothing_is_not_found() {
        let mut repo = MockBrandRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = BrandService::new(repo);
        let err = service.delete_brand(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::NotFound {
                kind: EntityKind::Brand,
                ..
            }
        ));
    }
}
