use domain_catalog::{
    brands, categories, favorites, ingredients, offers, product_categories, products,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Products, brands, categories, ingredients, offers and user favorite products"
    ),
    servers(
        (url = "/v1", description = "API base path")
    ),
    nest(
        (path = "/brands", api = brands::handlers::ApiDoc),
        (path = "/categories", api = categories::handlers::ApiDoc),
        (path = "/ingredients", api = ingredients::handlers::ApiDoc),
        (path = "/products", api = products::handlers::ApiDoc),
        (path = "/products", api = offers::handlers::ApiDoc),
        (path = "/products", api = product_categories::handlers::ApiDoc),
        (path = "/users", api = favorites::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
