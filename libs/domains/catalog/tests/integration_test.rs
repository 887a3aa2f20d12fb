//! Integration tests for the catalog domain
//!
//! These run the Postgres repositories against a real database started with
//! testcontainers, covering what the in-memory store cannot prove:
//! - the joined lowest-offer sort and NULLS LAST ordering
//! - LIKE escaping of search terms
//! - foreign-key actions (SET NULL, CASCADE)
//! - transactional category reconciliation

use domain_catalog::brands::{BrandRepository, CreateBrand, PgBrandRepository};
use domain_catalog::categories::{CategoryRepository, CreateCategory, PgCategoryRepository};
use domain_catalog::favorites::{FavoriteProductRepository, PgFavoriteProductRepository};
use domain_catalog::offers::{CreateOffer, OfferRepository, PgOfferRepository};
use domain_catalog::product_categories::{PgProductCategoryRepository, ProductCategoryRepository};
use domain_catalog::products::{CreateProduct, PRODUCT_SORTS, PgProductRepository, ProductRepository};
use domain_catalog::{CatalogError, EntityKind};
use paging::{ListParams, ListQuery};
use sea_orm::DatabaseConnection;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};
use uuid::Uuid;

fn product_query(sort: Option<&str>, search: Option<&str>, skip: Option<u64>) -> ListQuery {
    ListParams {
        skip,
        take: None,
        search: search.map(str::to_owned),
        sort: sort.map(str::to_owned),
    }
    .parse(&PRODUCT_SORTS)
    .unwrap()
}

async fn product(db: &DatabaseConnection, slug: String, name: &str) -> Uuid {
    PgProductRepository::new(db.clone())
        .create(CreateProduct {
            slug,
            name: Some(name.to_owned()),
            ..CreateProduct::default()
        })
        .await
        .unwrap()
        .id
}

async fn offer(db: &DatabaseConnection, product_id: Uuid, price_pln: f64) {
    PgOfferRepository::new(db.clone())
        .create(
            product_id,
            CreateOffer {
                price_pln,
                url: None,
            },
        )
        .await
        .unwrap();
}

// ============================================================================
// Paginated listing
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_price_sort_uses_cheapest_offer_and_nulls_last() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let builder = TestDataBuilder::from_test_name("price_sort");

    let tea = product(&conn, builder.slug("product", "tea"), "Tea").await;
    let coffee = product(&conn, builder.slug("product", "coffee"), "Coffee").await;
    let water = product(&conn, builder.slug("product", "water"), "Water").await;
    offer(&conn, tea, 19.99).await;
    offer(&conn, tea, 4.5).await;
    offer(&conn, coffee, 11.0).await;

    let repo = PgProductRepository::new(conn.clone());

    let page = repo.list(product_query(Some("price-asc"), None, None)).await.unwrap();
    let ids: Vec<Uuid> = page.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![tea, coffee, water]);
    assert_eq!(page.meta.total_items_count, 3, "one row per product");

    let page = repo.list(product_query(Some("price-desc"), None, None)).await.unwrap();
    let ids: Vec<Uuid> = page.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![coffee, tea, water]);

    let page = repo.list(product_query(Some("name-asc"), None, None)).await.unwrap();
    assert_sorted_nulls_last(&page.items, |p| p.name.clone());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_treats_wildcards_literally() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let builder = TestDataBuilder::from_test_name("search_escaping");

    let promo = product(&conn, builder.slug("product", "promo"), "Tea 50% off").await;
    product(&conn, builder.slug("product", "bulk"), "Tea 500 g").await;
    product(&conn, builder.slug("product", "under"), "Tea_bags").await;

    let repo = PgProductRepository::new(conn.clone());

    let page = repo.list(product_query(None, Some("50%"), None)).await.unwrap();
    assert_eq!(page.meta.total_items_count, 1);
    assert_uuid_eq(page.items[0].id, promo, "promo product");

    let page = repo.list(product_query(None, Some("a_b"), None)).await.unwrap();
    assert_eq!(page.meta.total_items_count, 1);

    let page = repo.list(product_query(None, Some("tea"), None)).await.unwrap();
    assert_eq!(page.meta.total_items_count, 0, "search is case-sensitive");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_skip_beyond_total_returns_empty_page() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let builder = TestDataBuilder::from_test_name("skip_beyond");

    for i in 0..3 {
        product(&conn, builder.slug("product", &i.to_string()), "Tea").await;
    }

    let page = PgProductRepository::new(conn)
        .list(product_query(None, None, Some(10)))
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.meta.skip, 10);
    assert_eq!(page.meta.total_items_count, 3);
    assert_eq!(page.meta.page_items_count, 0);
}

// ============================================================================
// Constraints
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_brand_slug_conflicts() {
    let db = TestDatabase::new().await;
    let repo = PgBrandRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("duplicate_brand");

    let input = CreateBrand {
        slug: builder.slug("brand", "acme"),
        name: "Acme".into(),
    };
    repo.create(input.clone()).await.unwrap();

    let err = repo.create(input).await.unwrap_err();
    assert!(matches!(err, CatalogError::Conflict(_)), "{err:?}");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_deleting_brand_keeps_products() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let builder = TestDataBuilder::from_test_name("brand_set_null");

    let brand = PgBrandRepository::new(conn.clone())
        .create(CreateBrand {
            slug: builder.slug("brand", "acme"),
            name: "Acme".into(),
        })
        .await
        .unwrap();

    let products = PgProductRepository::new(conn.clone());
    let created = products
        .create(CreateProduct {
            slug: builder.slug("product", "anvil"),
            brand_id: Some(brand.id),
            ..CreateProduct::default()
        })
        .await
        .unwrap();

    assert!(PgBrandRepository::new(conn).delete(brand.id).await.unwrap());

    let product = assert_some(
        products.get_by_id(created.id).await.unwrap(),
        "product outlives its brand",
    );
    assert_eq!(product.brand_id, None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unknown_brand_reference_is_not_found() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("unknown_brand");
    let brand_id = Uuid::new_v4();

    let err = PgProductRepository::new(db.connection())
        .create(CreateProduct {
            slug: builder.slug("product", "orphan"),
            brand_id: Some(brand_id),
            ..CreateProduct::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CatalogError::NotFound { kind: EntityKind::Brand, id } if id == brand_id
    ));
}

// ============================================================================
// Category reconciliation
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_replace_categories_round_trip() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let builder = TestDataBuilder::from_test_name("replace_categories");

    let product_id = product(&conn, builder.slug("product", "tea"), "Tea").await;
    let categories = PgCategoryRepository::new(conn.clone());
    let mut ids = Vec::new();
    for name in ["drinks", "bio", "hot"] {
        let created = categories
            .create(CreateCategory {
                slug: builder.slug("category", name),
                name: name.to_uppercase(),
            })
            .await
            .unwrap();
        ids.push(created.id);
    }
    let (drinks, bio, hot) = (ids[0], ids[1], ids[2]);

    let repo = PgProductCategoryRepository::new(conn.clone());

    let first = repo.replace(product_id, vec![drinks, bio, drinks]).await.unwrap();
    assert_eq!(first.added, vec![drinks, bio]);
    assert_eq!(first.categories.len(), 2);

    let second = repo.replace(product_id, vec![bio, drinks]).await.unwrap();
    assert!(second.is_unchanged());
    assert_eq!(second.categories, first.categories);

    let third = repo.replace(product_id, vec![hot, bio]).await.unwrap();
    assert_eq!(third.added, vec![hot]);
    assert_eq!(third.removed, vec![drinks]);

    let ghost = Uuid::new_v4();
    let err = repo.replace(product_id, vec![drinks, ghost]).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFoundMany { ref ids, .. } if ids == &vec![ghost]));

    let stored: Vec<Uuid> = repo
        .list_for_product(product_id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(stored.len(), 2);
    assert!(stored.contains(&hot) && stored.contains(&bio));

    let err = repo.replace(Uuid::new_v4(), vec![]).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { kind: EntityKind::Product, .. }));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_concurrent_replacements_leave_one_consistent_set() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let builder = TestDataBuilder::from_test_name("concurrent_replace");

    let product_id = product(&conn, builder.slug("product", "tea"), "Tea").await;
    let categories = PgCategoryRepository::new(conn.clone());
    let a = categories
        .create(CreateCategory {
            slug: builder.slug("category", "a"),
            name: "A".into(),
        })
        .await
        .unwrap()
        .id;
    let b = categories
        .create(CreateCategory {
            slug: builder.slug("category", "b"),
            name: "B".into(),
        })
        .await
        .unwrap()
        .id;

    let repo = PgProductCategoryRepository::new(conn.clone());
    let (left, right) = tokio::join!(
        repo.replace(product_id, vec![a]),
        repo.replace(product_id, vec![b]),
    );
    assert!(left.is_ok() && right.is_ok());

    let stored = repo.list_for_product(product_id).await.unwrap();
    assert_eq!(stored.len(), 1, "one replacement wins entirely");
}

// ============================================================================
// Cascades
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_deleting_product_removes_offers_and_favorites() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let builder = TestDataBuilder::from_test_name("product_cascade");
    let user_id = builder.user_id();

    let product_id = product(&conn, builder.slug("product", "tea"), "Tea").await;
    offer(&conn, product_id, 9.99).await;

    let favorites = PgFavoriteProductRepository::new(conn.clone());
    favorites.add(user_id, product_id).await.unwrap();
    favorites.add(user_id, product_id).await.unwrap();

    let page = favorites
        .list(user_id, product_query(None, None, None))
        .await
        .unwrap();
    assert_eq!(page.meta.total_items_count, 1);

    assert!(PgProductRepository::new(conn.clone()).delete(product_id).await.unwrap());

    let page = favorites
        .list(user_id, product_query(None, None, None))
        .await
        .unwrap();
    assert!(page.items.is_empty());

    let err = PgOfferRepository::new(conn)
        .list_for_product(product_id)
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
}
