//! Process-local catalog store.
//!
//! Implements every repository trait over plain vectors behind one lock, with
//! the same uniqueness, reference and cascade rules as the Postgres schema.
//! Backs the HTTP handler tests.

use async_trait::async_trait;
use database::AssociationDelta;
use paging::{ListQuery, Page, SortSpec, paginate, search, sort_nulls_last};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::brands::{BrandRepository, CreateBrand, entity as brands};
use crate::categories::{CategoryRepository, CreateCategory, entity as categories};
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::favorites::FavoriteProductRepository;
use crate::ingredients::{CreateIngredient, IngredientRepository, entity as ingredients};
use crate::offers::{CreateOffer, OfferRepository, entity as offers};
use crate::product_categories::{CategoryAssignment, ProductCategoryRepository};
use crate::products::{CreateProduct, OFFER_ALIAS, ProductRepository, entity as products};

#[derive(Debug, Default)]
struct Tables {
    brands: Vec<brands::Model>,
    categories: Vec<categories::Model>,
    ingredients: Vec<ingredients::Model>,
    products: Vec<products::Model>,
    offers: Vec<offers::Model>,
    /// (product_id, category_id)
    product_categories: Vec<(Uuid, Uuid)>,
    /// (user_id, product_id)
    favorites: Vec<(Uuid, Uuid)>,
}

impl Tables {
    fn has_product(&self, id: Uuid) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    fn lowest_price(&self, product_id: Uuid) -> Option<f64> {
        self.offers
            .iter()
            .filter(|o| o.product_id == product_id)
            .map(|o| o.price_pln)
            .reduce(f64::min)
    }

    fn categories_of(&self, product_id: Uuid) -> Vec<categories::Model> {
        let linked: HashSet<Uuid> = self
            .product_categories
            .iter()
            .filter(|(p, _)| *p == product_id)
            .map(|(_, c)| *c)
            .collect();

        let mut rows: Vec<categories::Model> = self
            .categories
            .iter()
            .filter(|c| linked.contains(&c.id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.slug.cmp(&b.slug));
        rows
    }

    /// Searches and orders `rows` the way the product listing query does.
    fn product_page(
        &self,
        rows: Vec<products::Model>,
        query: ListQuery,
    ) -> Page<products::Model> {
        let mut rows: Vec<products::Model> = rows
            .into_iter()
            .filter(|p| search::matches(p.name.as_deref(), query.search.as_deref()))
            .collect();

        if let Some(spec) = query.sort {
            if spec.field.table == OFFER_ALIAS {
                sort_nulls_last(&mut rows, spec.direction, |p| self.lowest_price(p.id));
            } else {
                sort_nulls_last(&mut rows, spec.direction, |p| p.name.clone());
            }
        }

        paginate(rows, query.paging)
    }
}

/// Filters by `text` and orders by it when a sort was requested.
fn named_page<T: Clone>(
    rows: &[T],
    query: ListQuery,
    text: impl Fn(&T) -> &str,
) -> Page<T> {
    let mut rows: Vec<T> = rows
        .iter()
        .filter(|row| search::matches(Some(text(row)), query.search.as_deref()))
        .cloned()
        .collect();

    if let Some(SortSpec { direction, .. }) = query.sort {
        sort_nulls_last(&mut rows, direction, |row| Some(text(row).to_owned()));
    }

    paginate(rows, query.paging)
}

fn slug_taken(kind: EntityKind, slug: &str) -> CatalogError {
    CatalogError::Conflict(format!("{kind} with slug \"{slug}\" already exists"))
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BrandRepository for InMemoryCatalog {
    async fn create(&self, input: CreateBrand) -> CatalogResult<brands::Model> {
        let mut tables = self.tables.write().await;
        if tables.brands.iter().any(|b| b.slug == input.slug) {
            return Err(slug_taken(EntityKind::Brand, &input.slug));
        }

        let brand = brands::Model {
            id: Uuid::now_v7(),
            slug: input.slug,
            name: input.name,
        };
        tables.brands.push(brand.clone());
        Ok(brand)
    }

    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<brands::Model>> {
        let tables = self.tables.read().await;
        Ok(tables.brands.iter().find(|b| b.id == id).cloned())
    }

    async fn list(&self, query: ListQuery) -> CatalogResult<Page<brands::Model>> {
        let tables = self.tables.read().await;
        Ok(named_page(&tables.brands, query, |b| &b.name))
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.brands.len();
        tables.brands.retain(|b| b.id != id);
        if tables.brands.len() == before {
            return Ok(false);
        }

        for product in tables.products.iter_mut() {
            if product.brand_id == Some(id) {
                product.brand_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn create(&self, input: CreateCategory) -> CatalogResult<categories::Model> {
        let mut tables = self.tables.write().await;
        if tables.categories.iter().any(|c| c.slug == input.slug) {
            return Err(slug_taken(EntityKind::Category, &input.slug));
        }

        let category = categories::Model {
            id: Uuid::now_v7(),
            slug: input.slug,
            name: input.name,
        };
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<categories::Model>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, query: ListQuery) -> CatalogResult<Page<categories::Model>> {
        let tables = self.tables.read().await;
        Ok(named_page(&tables.categories, query, |c| &c.name))
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        if tables.categories.len() == before {
            return Ok(false);
        }

        tables.product_categories.retain(|(_, c)| *c != id);
        Ok(true)
    }
}

#[async_trait]
impl IngredientRepository for InMemoryCatalog {
    async fn create(&self, input: CreateIngredient) -> CatalogResult<ingredients::Model> {
        let mut tables = self.tables.write().await;
        if tables.ingredients.iter().any(|i| i.slug == input.slug) {
            return Err(slug_taken(EntityKind::Ingredient, &input.slug));
        }

        let ingredient = ingredients::Model {
            id: Uuid::now_v7(),
            slug: input.slug,
            latin_name: input.latin_name,
        };
        tables.ingredients.push(ingredient.clone());
        Ok(ingredient)
    }

    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<ingredients::Model>> {
        let tables = self.tables.read().await;
        Ok(tables.ingredients.iter().find(|i| i.id == id).cloned())
    }

    async fn list(&self, query: ListQuery) -> CatalogResult<Page<ingredients::Model>> {
        let tables = self.tables.read().await;
        Ok(named_page(&tables.ingredients, query, |i| &i.latin_name))
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.ingredients.len();
        tables.ingredients.retain(|i| i.id != id);
        Ok(tables.ingredients.len() < before)
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn create(&self, input: CreateProduct) -> CatalogResult<products::Model> {
        let mut tables = self.tables.write().await;
        if let Some(brand_id) = input.brand_id
            && !tables.brands.iter().any(|b| b.id == brand_id)
        {
            return Err(CatalogError::not_found(EntityKind::Brand, brand_id));
        }

        let product = products::Model {
            id: Uuid::now_v7(),
            slug: input.slug,
            name: input.name,
            mass_kilograms: input.mass_kilograms,
            volume_liters: input.volume_liters,
            brand_id: input.brand_id,
        };
        tables.products.push(product.clone());
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<products::Model>> {
        let tables = self.tables.read().await;
        Ok(tables.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, query: ListQuery) -> CatalogResult<Page<products::Model>> {
        let tables = self.tables.read().await;
        Ok(tables.product_page(tables.products.clone(), query))
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.products.len();
        tables.products.retain(|p| p.id != id);
        if tables.products.len() == before {
            return Ok(false);
        }

        tables.offers.retain(|o| o.product_id != id);
        tables.product_categories.retain(|(p, _)| *p != id);
        tables.favorites.retain(|(_, p)| *p != id);
        Ok(true)
    }
}

#[async_trait]
impl OfferRepository for InMemoryCatalog {
    async fn create(&self, product_id: Uuid, input: CreateOffer) -> CatalogResult<offers::Model> {
        let mut tables = self.tables.write().await;
        if !tables.has_product(product_id) {
            return Err(CatalogError::not_found(EntityKind::Product, product_id));
        }

        let offer = offers::Model {
            id: Uuid::now_v7(),
            product_id,
            price_pln: input.price_pln,
            url: input.url,
        };
        tables.offers.push(offer.clone());
        Ok(offer)
    }

    async fn list_for_product(&self, product_id: Uuid) -> CatalogResult<Vec<offers::Model>> {
        let tables = self.tables.read().await;
        if !tables.has_product(product_id) {
            return Err(CatalogError::not_found(EntityKind::Product, product_id));
        }

        let mut rows: Vec<offers::Model> = tables
            .offers
            .iter()
            .filter(|o| o.product_id == product_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.price_pln.total_cmp(&b.price_pln));
        Ok(rows)
    }
}

#[async_trait]
impl ProductCategoryRepository for InMemoryCatalog {
    async fn list_for_product(&self, product_id: Uuid) -> CatalogResult<Vec<categories::Model>> {
        let tables = self.tables.read().await;
        if !tables.has_product(product_id) {
            return Err(CatalogError::not_found(EntityKind::Product, product_id));
        }
        Ok(tables.categories_of(product_id))
    }

    async fn replace(
        &self,
        product_id: Uuid,
        category_ids: Vec<Uuid>,
    ) -> CatalogResult<CategoryAssignment> {
        let mut tables = self.tables.write().await;
        if !tables.has_product(product_id) {
            return Err(CatalogError::not_found(EntityKind::Product, product_id));
        }

        let current: Vec<Uuid> = tables
            .product_categories
            .iter()
            .filter(|(p, _)| *p == product_id)
            .map(|(_, c)| *c)
            .collect();

        let delta = AssociationDelta::between(&current, &category_ids);

        let missing: Vec<Uuid> = delta
            .to_add
            .iter()
            .copied()
            .filter(|id| !tables.categories.iter().any(|c| c.id == *id))
            .collect();
        if !missing.is_empty() {
            return Err(CatalogError::NotFoundMany {
                kind: EntityKind::Category,
                ids: missing,
            });
        }

        tables
            .product_categories
            .retain(|(p, c)| *p != product_id || !delta.to_remove.contains(c));
        tables
            .product_categories
            .extend(delta.to_add.iter().map(|c| (product_id, *c)));

        Ok(CategoryAssignment {
            categories: tables.categories_of(product_id),
            added: delta.to_add,
            removed: delta.to_remove,
        })
    }
}

#[async_trait]
impl FavoriteProductRepository for InMemoryCatalog {
    async fn add(&self, user_id: Uuid, product_id: Uuid) -> CatalogResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.has_product(product_id) {
            return Err(CatalogError::not_found(EntityKind::Product, product_id));
        }

        if !tables.favorites.contains(&(user_id, product_id)) {
            tables.favorites.push((user_id, product_id));
        }
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, product_id: Uuid) -> CatalogResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.favorites.len();
        tables
            .favorites
            .retain(|pair| *pair != (user_id, product_id));
        Ok(tables.favorites.len() < before)
    }

    async fn list(
        &self,
        user_id: Uuid,
        query: ListQuery,
    ) -> CatalogResult<Page<products::Model>> {
        let tables = self.tables.read().await;
        let favorites: HashSet<Uuid> = tables
            .favorites
            .iter()
            .filter(|(u, _)| *u == user_id)
            .map(|(_, p)| *p)
            .collect();

        let rows = tables
            .products
            .iter()
            .filter(|p| favorites.contains(&p.id))
            .cloned()
            .collect();
        Ok(tables.product_page(rows, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::PRODUCT_SORTS;
    use paging::ListParams;

    fn query(sort: Option<&str>, search: Option<&str>) -> ListQuery {
        ListParams {
            sort: sort.map(str::to_owned),
            search: search.map(str::to_owned),
            ..ListParams::default()
        }
        .parse(&PRODUCT_SORTS)
        .unwrap()
    }

    async fn product(catalog: &InMemoryCatalog, slug: &str, name: Option<&str>) -> Uuid {
        ProductRepository::create(
            catalog,
            CreateProduct {
                slug: slug.into(),
                name: name.map(str::to_owned),
                ..CreateProduct::default()
            },
        )
        .await
        .unwrap()
        .id
    }

    async fn category(catalog: &InMemoryCatalog, slug: &str) -> Uuid {
        CategoryRepository::create(
            catalog,
            CreateCategory {
                slug: slug.into(),
                name: slug.to_uppercase(),
            },
        )
        .await
        .unwrap()
        .id
    }

    async fn offer(catalog: &InMemoryCatalog, product_id: Uuid, price_pln: f64) {
        OfferRepository::create(
            catalog,
            product_id,
            CreateOffer {
                price_pln,
                url: None,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_product_sorts_by_lowest_offer_or_name() {
        let catalog = InMemoryCatalog::new();
        let cheap = product(&catalog, "cheap", Some("Cheap")).await;
        let pricey = product(&catalog, "pricey", Some("Pricey")).await;
        let unpriced = product(&catalog, "unpriced", Some("Unpriced")).await;
        offer(&catalog, pricey, 30.0).await;
        offer(&catalog, cheap, 12.5).await;
        offer(&catalog, cheap, 99.0).await;

        for (token, expected) in [
            ("price-asc", [cheap, pricey, unpriced]),
            ("price-desc", [pricey, cheap, unpriced]),
            ("name-desc", [unpriced, pricey, cheap]),
        ] {
            let page = ProductRepository::list(&catalog, query(Some(token), None))
                .await
                .unwrap();
            let ids: Vec<Uuid> = page.items.iter().map(|p| p.id).collect();
            assert_eq!(ids, expected, "sort {token}");
            assert_eq!(page.meta.total_items_count, 3);
        }
    }

    #[tokio::test]
    async fn test_search_skips_products_without_name() {
        let catalog = InMemoryCatalog::new();
        product(&catalog, "green-tea", Some("Green Tea")).await;
        product(&catalog, "nameless", None).await;

        let page = ProductRepository::list(&catalog, query(None, Some("Tea")))
            .await
            .unwrap();
        assert_eq!(page.meta.total_items_count, 1);

        let page = ProductRepository::list(&catalog, query(None, Some("tea")))
            .await
            .unwrap();
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts_per_table() {
        let catalog = InMemoryCatalog::new();
        category(&catalog, "snacks").await;

        let err = CategoryRepository::create(
            &catalog,
            CreateCategory {
                slug: "snacks".into(),
                name: "Other".into(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Category with slug \"snacks\" already exists");

        let brand = BrandRepository::create(
            &catalog,
            CreateBrand {
                slug: "snacks".into(),
                name: "Snacks Inc".into(),
            },
        )
        .await;
        assert!(brand.is_ok());
    }

    #[tokio::test]
    async fn test_deleting_brand_detaches_its_products() {
        let catalog = InMemoryCatalog::new();
        let brand = BrandRepository::create(
            &catalog,
            CreateBrand {
                slug: "acme".into(),
                name: "Acme".into(),
            },
        )
        .await
        .unwrap();

        let created = ProductRepository::create(
            &catalog,
            CreateProduct {
                slug: "anvil".into(),
                brand_id: Some(brand.id),
                ..CreateProduct::default()
            },
        )
        .await
        .unwrap();

        assert!(BrandRepository::delete(&catalog, brand.id).await.unwrap());

        let product = ProductRepository::get_by_id(&catalog, created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.brand_id, None);
    }

    #[tokio::test]
    async fn test_unknown_brand_is_rejected() {
        let catalog = InMemoryCatalog::new();
        let brand_id = Uuid::new_v4();

        let err = ProductRepository::create(
            &catalog,
            CreateProduct {
                slug: "orphan".into(),
                brand_id: Some(brand_id),
                ..CreateProduct::default()
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::NotFound { kind: EntityKind::Brand, id } if id == brand_id
        ));
    }

    #[tokio::test]
    async fn test_deleting_product_cascades() {
        let catalog = InMemoryCatalog::new();
        let user = Uuid::new_v4();
        let id = product(&catalog, "doomed", None).await;
        let snacks = category(&catalog, "snacks").await;
        offer(&catalog, id, 5.0).await;
        catalog.replace(id, vec![snacks]).await.unwrap();
        catalog.add(user, id).await.unwrap();

        assert!(ProductRepository::delete(&catalog, id).await.unwrap());

        let tables = catalog.tables.read().await;
        assert!(tables.offers.is_empty());
        assert!(tables.product_categories.is_empty());
        assert!(tables.favorites.is_empty());
        assert_eq!(tables.categories.len(), 1);
    }

    #[tokio::test]
    async fn test_replace_writes_only_the_difference() {
        let catalog = InMemoryCatalog::new();
        let id = product(&catalog, "tea", None).await;
        let (a, b, c) = (
            category(&catalog, "a").await,
            category(&catalog, "b").await,
            category(&catalog, "c").await,
        );

        let first = catalog.replace(id, vec![b, a, b]).await.unwrap();
        assert_eq!(first.added, vec![b, a]);
        let slugs: Vec<&str> = first.categories.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);

        let second = catalog.replace(id, vec![a, b]).await.unwrap();
        assert!(second.is_unchanged());
        assert_eq!(second.categories, first.categories);

        let third = catalog.replace(id, vec![c, a]).await.unwrap();
        assert_eq!(third.added, vec![c]);
        assert_eq!(third.removed, vec![b]);
    }

    #[tokio::test]
    async fn test_replace_with_unknown_category_keeps_existing_set() {
        let catalog = InMemoryCatalog::new();
        let id = product(&catalog, "tea", None).await;
        let known = category(&catalog, "known").await;
        catalog.replace(id, vec![known]).await.unwrap();

        let ghost = Uuid::new_v4();
        let err = catalog.replace(id, vec![ghost]).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFoundMany { ref ids, .. } if ids == &vec![ghost]
        ));

        let stored = ProductCategoryRepository::list_for_product(&catalog, id)
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, known);
    }

    #[tokio::test]
    async fn test_favorites_are_idempotent_and_per_user() {
        let catalog = InMemoryCatalog::new();
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
        let id = product(&catalog, "tea", Some("Tea")).await;

        catalog.add(alice, id).await.unwrap();
        catalog.add(alice, id).await.unwrap();

        let page = FavoriteProductRepository::list(&catalog, alice, query(None, None))
            .await
            .unwrap();
        assert_eq!(page.meta.total_items_count, 1);

        let page = FavoriteProductRepository::list(&catalog, bob, query(None, None))
            .await
            .unwrap();
        assert!(page.items.is_empty());

        assert!(catalog.remove(alice, id).await.unwrap());
        assert!(!catalog.remove(alice, id).await.unwrap());
    }

    #[tokio::test]
    async fn test_offers_of_unknown_product() {
        let catalog = InMemoryCatalog::new();
        let err = OfferRepository::list_for_product(&catalog, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { kind: EntityKind::Product, .. }));
    }
}
