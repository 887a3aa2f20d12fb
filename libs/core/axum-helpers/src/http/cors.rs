use axum::http::{HeaderValue, Method, header};
use core_config::env_or_default;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Environment variable holding comma-separated allowed origins.
pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

/// Creates a CORS layer for the catalog API.
///
/// - the listed origins only
/// - GET, POST, PUT, DELETE, OPTIONS
/// - Content-Type and Accept headers
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Builds a CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// Returns `Ok(None)` when the variable is unset or blank, in which case no
/// CORS headers are emitted. Unparseable origins are a startup error.
pub fn cors_layer_from_env() -> io::Result<Option<CorsLayer>> {
    let raw = env_or_default(CORS_ALLOWED_ORIGIN, "");
    let origins = parse_origins(&raw)?;
    if origins.is_empty() {
        return Ok(None);
    }

    tracing::info!("CORS configured with allowed origins: {}", raw);
    Ok(Some(create_cors_layer(origins)))
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid {} value: {}", CORS_ALLOWED_ORIGIN, e),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins("http://localhost:5173, ,https://shop.example.com").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://shop.example.com");
    }

    #[test]
    fn test_cors_is_disabled_without_origins() {
        temp_env::with_var_unset(CORS_ALLOWED_ORIGIN, || {
            assert!(cors_layer_from_env().unwrap().is_none());
        });
        temp_env::with_var(CORS_ALLOWED_ORIGIN, Some("  "), || {
            assert!(cors_layer_from_env().unwrap().is_none());
        });
    }

    #[test]
    fn test_cors_layer_built_from_listed_origins() {
        temp_env::with_var(
            CORS_ALLOWED_ORIGIN,
            Some("http://localhost:5173,https://shop.example.com"),
            || {
                assert!(cors_layer_from_env().unwrap().is_some());
            },
        );
    }

    #[test]
    fn test_invalid_origin_is_an_error() {
        temp_env::with_var(CORS_ALLOWED_ORIGIN, Some("http://bad\norigin"), || {
            assert!(cors_layer_from_env().is_err());
        });
    }
}
