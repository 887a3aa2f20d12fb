use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use paging::{ListParams, Page};
use std::sync::Arc;
use utoipa::OpenApi;

use super::models::{Brand, CreateBrand};
use super::repository::BrandRepository;
use super::service::BrandService;
use crate::error::CatalogResult;

pub const TAG: &str = "brands";

/// OpenAPI documentation for the Brands API
#[derive(OpenApi)]
#[openapi(
    paths(list_brands, create_brand, get_brand, delete_brand),
    components(
        schemas(Brand, CreateBrand),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Brand catalog endpoints")
    )
)]
pub struct ApiDoc;

pub fn router<R: BrandRepository + 'static>(service: BrandService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_brands).post(create_brand))
        .route("/{id}", get(get_brand).delete(delete_brand))
        .with_state(shared_service)
}

/// List brands, optionally searched by name and sorted
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Page of brands", body = Page<Brand>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_brands<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> CatalogResult<Json<Page<Brand>>> {
    let page = service.list_brands(params).await?;
    Ok(Json(page))
}

#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBrand,
    responses(
        (status = 201, description = "Brand created", body = Brand),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateBrand>,
) -> CatalogResult<impl IntoResponse> {
    let brand = service.create_brand(input).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand found", body = Brand),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<Brand>> {
    let brand = service.get_brand(id).await?;
    Ok(Json(brand))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Brand ID")
    ),
    responses(
        (status = 204, description = "Brand deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<StatusCode> {
    service.delete_brand(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
