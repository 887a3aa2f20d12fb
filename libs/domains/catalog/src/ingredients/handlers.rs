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

use super::models::{Ingredient, CreateIngredient};
use super::repository::IngredientRepository;
use super::service::IngredientService;
use crate::error::CatalogResult;

pub const TAG: &str = "ingredients";

/// OpenAPI documentation for the Ingredients API
#[derive(OpenApi)]
#[openapi(
    paths(list_ingredients, create_ingredient, get_ingredient, delete_ingredient),
    components(
        schemas(Ingredient, CreateIngredient),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Ingredient catalog endpoints")
    )
)]
pub struct ApiDoc;

pub fn router<R: IngredientRepository + 'static>(service: IngredientService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_ingredients).post(create_ingredient))
        .route("/{id}", get(get_ingredient).delete(delete_ingredient))
        .with_state(shared_service)
}

/// List ingredients, optionally searched by latin name and sorted
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Page of ingredients", body = Page<Ingredient>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_ingredients<R: IngredientRepository>(
    State(service): State<Arc<IngredientService<R>>>,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> CatalogResult<Json<Page<Ingredient>>> {
    let page = service.list_ingredients(params).await?;
    Ok(Json(page))
}

#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateIngredient,
    responses(
        (status = 201, description = "Ingredient created", body = Ingredient),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_ingredient<R: IngredientRepository>(
    State(service): State<Arc<IngredientService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateIngredient>,
) -> CatalogResult<impl IntoResponse> {
    let ingredient = service.create_ingredient(input).await?;
    Ok((StatusCode::CREATED, Json(ingredient)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 200, description = "Ingredient found", body = Ingredient),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_ingredient<R: IngredientRepository>(
    State(service): State<Arc<IngredientService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<Ingredient>> {
    let ingredient = service.get_ingredient(id).await?;
    Ok(Json(ingredient))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 204, description = "Ingredient deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_ingredient<R: IngredientRepository>(
    State(service): State<Arc<IngredientService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<StatusCode> {
    service.delete_ingredient(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
