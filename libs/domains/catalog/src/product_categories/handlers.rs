use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use axum_helpers::{
    AppError, UuidPath,
    errors::responses::{
        BadRequestUuidResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use super::repository::ProductCategoryRepository;
use super::service::ProductCategoryService;
use crate::categories::Category;
use crate::products::handlers::TAG;

#[derive(OpenApi)]
#[openapi(paths(get_product_categories, put_product_categories))]
pub struct ApiDoc;

/// Routes under `/products`
pub fn router<R: ProductCategoryRepository + 'static>(
    service: ProductCategoryService<R>,
) -> Router {
    Router::new()
        .route(
            "/{id}/categories",
            get(get_product_categories).put(put_product_categories),
        )
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "/{id}/categories",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Categories of the product, ordered by slug", body = Vec<Category>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product_categories<R: ProductCategoryRepository>(
    State(service): State<Arc<ProductCategoryService<R>>>,
    UuidPath(product_id): UuidPath,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = service.get_categories(product_id).await?;
    Ok(Json(categories))
}

/// Replace the product's categories with exactly the given set
#[utoipa::path(
    put,
    path = "/{id}/categories",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body(content = Vec<Uuid>, description = "Category ids; duplicates are ignored"),
    responses(
        (status = 200, description = "Resulting categories, ordered by slug", body = Vec<Category>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn put_product_categories<R: ProductCategoryRepository>(
    State(service): State<Arc<ProductCategoryService<R>>>,
    UuidPath(product_id): UuidPath,
    payload: Result<Json<Vec<Uuid>>, JsonRejection>,
) -> Result<Json<Vec<Category>>, AppError> {
    let Json(category_ids) = payload?;
    let categories = service.set_categories(product_id, category_ids).await?;
    Ok(Json(categories))
}
