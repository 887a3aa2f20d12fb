use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use super::models::{CreateOffer, Offer};
use super::repository::OfferRepository;
use super::service::OfferService;
use crate::error::CatalogResult;
use crate::products::handlers::TAG;

#[derive(OpenApi)]
#[openapi(
    paths(list_offers, create_offer),
    components(schemas(Offer, CreateOffer))
)]
pub struct ApiDoc;

/// Routes under `/products`
pub fn router<R: OfferRepository + 'static>(service: OfferService<R>) -> Router {
    Router::new()
        .route("/{id}/offers", get(list_offers).post(create_offer))
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "/{id}/offers",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Offers of the product, cheapest first", body = Vec<Offer>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_offers<R: OfferRepository>(
    State(service): State<Arc<OfferService<R>>>,
    UuidPath(product_id): UuidPath,
) -> CatalogResult<Json<Vec<Offer>>> {
    let offers = service.list_offers(product_id).await?;
    Ok(Json(offers))
}

#[utoipa::path(
    post,
    path = "/{id}/offers",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = CreateOffer,
    responses(
        (status = 201, description = "Offer created", body = Offer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_offer<R: OfferRepository>(
    State(service): State<Arc<OfferService<R>>>,
    UuidPath(product_id): UuidPath,
    ValidatedJson(input): ValidatedJson<CreateOffer>,
) -> CatalogResult<impl IntoResponse> {
    let offer = service.create_offer(product_id, input).await?;
    Ok((StatusCode::CREATED, Json(offer)))
}
