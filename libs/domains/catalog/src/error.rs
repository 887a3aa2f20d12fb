use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use paging::PagingError;
use sea_orm::{DbErr, SqlErr};
use strum::Display;
use thiserror::Error;
use uuid::Uuid;

/// Kinds of rows a lookup can miss, as named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntityKind {
    Brand,
    Category,
    Ingredient,
    Product,
    Offer,
    User,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{kind} with id \"{id}\" not found")]
    NotFound { kind: EntityKind, id: Uuid },

    #[error("{kind} with ids {} not found", quoted(.ids))]
    NotFoundMany { kind: EntityKind, ids: Vec<Uuid> },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{service} service is unavailable: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    #[error("{service} service timed out")]
    UpstreamTimeout { service: &'static str },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

fn quoted(ids: &[Uuid]) -> String {
    ids.iter()
        .map(|id| format!("\"{id}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

impl CatalogError {
    pub fn not_found(kind: EntityKind, id: Uuid) -> Self {
        Self::NotFound { kind, id }
    }

    /// A foreign-key violation on insert means the referenced `kind` row is missing.
    pub(crate) fn missing_reference(err: DbErr, kind: EntityKind, id: Uuid) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::not_found(kind, id),
            _ => Self::Database(err),
        }
    }

    /// A unique violation becomes a `Conflict` with the given message.
    pub(crate) fn duplicate(err: DbErr, message: impl FnOnce() -> String) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(message()),
            _ => Self::Database(err),
        }
    }
}

impl From<PagingError> for CatalogError {
    fn from(err: PagingError) -> Self {
        CatalogError::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for CatalogError {
    fn from(err: validator::ValidationErrors) -> Self {
        CatalogError::Validation(err.to_string())
    }
}

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } | CatalogError::NotFoundMany { .. } => {
                AppError::NotFound(err.to_string())
            }
            CatalogError::Validation(msg) => AppError::BadRequest(msg),
            CatalogError::Conflict(msg) => AppError::Conflict(msg),
            CatalogError::Upstream { .. } => AppError::BadGateway(err.to_string()),
            CatalogError::UpstreamTimeout { .. } => AppError::GatewayTimeout(err.to_string()),
            CatalogError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
