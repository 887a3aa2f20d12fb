use axum::Router;
use domain_catalog::{
    brands, categories, favorites, ingredients, offers, product_categories, products,
};

use crate::state::AppState;

pub mod health;

/// Creates the API routes without the `/v1` prefix, which `create_router` adds.
///
/// Every sub-router has its state applied, so the result is stateless.
pub fn routes(state: &AppState) -> Router {
    let db = &state.db;

    let products = products::handlers::router(products::ProductService::new(
        products::PgProductRepository::new(db.clone()),
    ))
    .merge(offers::handlers::router(offers::OfferService::new(
        offers::PgOfferRepository::new(db.clone()),
    )))
    .merge(product_categories::handlers::router(
        product_categories::ProductCategoryService::new(
            product_categories::PgProductCategoryRepository::new(db.clone()),
        ),
    ));

    Router::new()
        .nest(
            "/brands",
            brands::handlers::router(brands::BrandService::new(brands::PgBrandRepository::new(
                db.clone(),
            ))),
        )
        .nest(
            "/categories",
            categories::handlers::router(categories::CategoryService::new(
                categories::PgCategoryRepository::new(db.clone()),
            )),
        )
        .nest(
            "/ingredients",
            ingredients::handlers::router(ingredients::IngredientService::new(
                ingredients::PgIngredientRepository::new(db.clone()),
            )),
        )
        .nest("/products", products)
        .nest(
            "/users",
            favorites::handlers::router(favorites::FavoriteProductService::new(
                favorites::PgFavoriteProductRepository::new(db.clone()),
                state.users.clone(),
            )),
        )
}

/// Router with the `/ready` endpoint; merged next to the stateless app router.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
