use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path prefix every API route is nested under.
pub const API_PREFIX: &str = "/v1";

/// Wraps the API routes with documentation and cross-cutting middleware.
///
/// - API routes nested under [`API_PREFIX`]
/// - Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`
/// - JSON 404 fallback
/// - request tracing, security headers, response compression
/// - CORS when `CORS_ALLOWED_ORIGIN` is set
///
/// Health endpoints are merged by the app with `health_router()` and its own
/// readiness handler.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` contains an invalid origin.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest(API_PREFIX, apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if let Some(cors_layer) = cors_layer_from_env()? {
        router = router.layer(cors_layer);
    }

    Ok(router.layer(CompressionLayer::new()))
}

/// Production server with coordinated shutdown and a bounded cleanup phase.
///
/// `cleanup` runs once a shutdown signal arrives (close pools, flush clients);
/// it is abandoned after `shutdown_timeout`.
///
/// ```ignore
/// create_production_app(router, &config.server, Duration::from_secs(30), async move {
///     db.close().await.ok();
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();
    let signal_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let mut cleanup_rx = coordinator.subscribe();
    tokio::spawn(async move { signal_handle.wait_for_signal().await });

    let cleanup_handle = tokio::spawn(async move {
        if cleanup_rx.recv().await.is_err() {
            return;
        }

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Server errors never reach the signal path; release the cleanup task ourselves.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct EmptyDoc;

    async fn router() -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        temp_env::async_with_vars([("CORS_ALLOWED_ORIGIN", None::<&str>)], async {
            create_router::<EmptyDoc>(apis).await.unwrap()
        })
        .await
    }

    async fn get_status(router: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        (response.status(), response.headers().clone())
    }

    #[tokio::test]
    async fn test_api_routes_are_nested_under_v1() {
        let (status, headers) = get_status(router().await, "/v1/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["x-content-type-options"], "nosniff");

        let (status, _) = get_status(router().await, "/ping").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (status, _) = get_status(router().await, "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
    }
}
