//! Custom extractors for Axum handlers.
//!
//! Each extractor rejects with the standard [`ErrorResponse`](crate::errors::ErrorResponse)
//! body so handlers never see malformed input.

pub mod uuid_path;
pub mod validated_json;
pub mod validated_query;

pub use uuid_path::{UuidPath, UuidPathPair};
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
