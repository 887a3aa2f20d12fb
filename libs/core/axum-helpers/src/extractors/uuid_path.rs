//! UUID path parameter extractors.

use crate::errors::{ErrorCode, error_response};
use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter.
///
/// ```ignore
/// async fn get_brand(UuidPath(id): UuidPath) -> String {
///     format!("Brand ID: {}", id)
/// }
///
/// let app = Router::new().route("/brands/{id}", get(get_brand));
/// ```
pub struct UuidPath(pub Uuid);

/// Extractor for routes carrying two UUID segments, in path order.
///
/// ```ignore
/// async fn add(UuidPathPair(user_id, product_id): UuidPathPair) -> StatusCode { .. }
///
/// let app = Router::new().route("/users/{user_id}/favorite-products/{product_id}", put(add));
/// ```
pub struct UuidPathPair(pub Uuid, pub Uuid);

fn parse_uuid(raw: &str) -> Result<Uuid, Response> {
    Uuid::parse_str(raw).map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid UUID: {}", raw),
            ErrorCode::InvalidUuid,
        )
    })
}

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        parse_uuid(&id).map(UuidPath)
    }
}

impl<S> FromRequestParts<S> for UuidPathPair
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((first, second)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        Ok(UuidPathPair(parse_uuid(&first)?, parse_uuid(&second)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/brands/{id}",
                get(|UuidPath(id): UuidPath| async move { id.to_string() }),
            )
            .route(
                "/users/{user_id}/favorite-products/{product_id}",
                get(|UuidPathPair(user, product): UuidPathPair| async move {
                    format!("{user}/{product}")
                }),
            )
    }

    async fn call(uri: &str) -> Response {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_uuid_is_extracted() {
        let id = Uuid::now_v7();
        let response = call(&format!("/brands/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_uuid_is_rejected() {
        let response = call("/brands/not-a-uuid").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_pair_rejects_when_either_segment_is_invalid() {
        let id = Uuid::new_v4();
        let response = call(&format!("/users/{id}/favorite-products/nope")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = call(&format!("/users/{id}/favorite-products/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
