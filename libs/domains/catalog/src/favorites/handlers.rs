use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, put},
};
use axum_helpers::{
    UuidPath, UuidPathPair, ValidatedQuery,
    errors::responses::{
        BadGatewayResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        GatewayTimeoutResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use paging::{ListParams, Page};
use std::sync::Arc;
use utoipa::OpenApi;

use super::directory::UserDirectory;
use super::repository::FavoriteProductRepository;
use super::service::FavoriteProductService;
use crate::error::CatalogResult;
use crate::products::Product;

pub const TAG: &str = "favorite-products";

#[derive(OpenApi)]
#[openapi(
    paths(list_favorite_products, add_favorite_product, remove_favorite_product),
    components(responses(BadGatewayResponse, GatewayTimeoutResponse)),
    tags(
        (name = TAG, description = "Products a user marked as favorite")
    )
)]
pub struct ApiDoc;

type SharedService<R, U> = Arc<FavoriteProductService<R, U>>;

/// Routes under `/users`
pub fn router<R, U>(service: FavoriteProductService<R, U>) -> Router
where
    R: FavoriteProductRepository + 'static,
    U: UserDirectory + 'static,
{
    Router::new()
        .route("/{user_id}/favorite-products", get(list_favorite_products))
        .route(
            "/{user_id}/favorite-products/{product_id}",
            put(add_favorite_product).delete(remove_favorite_product),
        )
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "/{user_id}/favorite-products",
    tag = TAG,
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ListParams
    ),
    responses(
        (status = 200, description = "Page of the user's favorite products", body = Page<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 502, response = BadGatewayResponse),
        (status = 504, response = GatewayTimeoutResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_favorite_products<R: FavoriteProductRepository, U: UserDirectory>(
    State(service): State<SharedService<R, U>>,
    UuidPath(user_id): UuidPath,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> CatalogResult<Json<Page<Product>>> {
    let page = service.list_favorites(user_id, params).await?;
    Ok(Json(page))
}

#[utoipa::path(
    put,
    path = "/{user_id}/favorite-products/{product_id}",
    tag = TAG,
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product is a favorite of the user"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 502, response = BadGatewayResponse),
        (status = 504, response = GatewayTimeoutResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_favorite_product<R: FavoriteProductRepository, U: UserDirectory>(
    State(service): State<SharedService<R, U>>,
    UuidPathPair(user_id, product_id): UuidPathPair,
) -> CatalogResult<StatusCode> {
    service.add_favorite(user_id, product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/{user_id}/favorite-products/{product_id}",
    tag = TAG,
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 502, response = BadGatewayResponse),
        (status = 504, response = GatewayTimeoutResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_favorite_product<R: FavoriteProductRepository, U: UserDirectory>(
    State(service): State<SharedService<R, U>>,
    UuidPathPair(user_id, product_id): UuidPathPair,
) -> CatalogResult<StatusCode> {
    service.remove_favorite(user_id, product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
