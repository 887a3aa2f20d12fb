use axum_helpers::AppError;
use serde::Deserialize;
use thiserror::Error;
use utoipa::IntoParams;
use validator::Validate;

use crate::sort::{SortSpec, SortTokens};

pub const DEFAULT_TAKE: u64 = 10;
pub const MAX_TAKE: u64 = 100;
/// Largest offset Postgres accepts as a `BIGINT` bind.
pub const MAX_SKIP: u64 = i64::MAX as u64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    #[error("skip must be at most {}, got {}", MAX_SKIP, .0)]
    InvalidSkip(u64),

    #[error("take must be between 1 and {}, got {}", MAX_TAKE, .0)]
    InvalidTake(u64),

    #[error("unknown sort \"{token}\"; expected one of: {}", .allowed.join(", "))]
    UnknownSortToken {
        token: String,
        allowed: Vec<&'static str>,
    },
}

impl From<PagingError> for AppError {
    fn from(err: PagingError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// A validated `(skip, take)` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingOptions {
    skip: u64,
    take: u64,
}

impl PagingOptions {
    pub fn new(skip: u64, take: u64) -> Result<Self, PagingError> {
        if skip > MAX_SKIP {
            return Err(PagingError::InvalidSkip(skip));
        }
        if !(1..=MAX_TAKE).contains(&take) {
            return Err(PagingError::InvalidTake(take));
        }
        Ok(Self { skip, take })
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn take(&self) -> u64 {
        self.take
    }
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            skip: 0,
            take: DEFAULT_TAKE,
        }
    }
}

/// Query-string parameters accepted by every list endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of items to skip (default 0)
    #[validate(range(max = 9223372036854775807u64))]
    pub skip: Option<u64>,
    /// Page size, 1 to 100 (default 10)
    #[validate(range(min = 1, max = 100))]
    pub take: Option<u64>,
    /// Case-sensitive substring filter on the resource's search field
    pub search: Option<String>,
    /// Sort token such as `name-asc`
    pub sort: Option<String>,
}

/// Parsed and validated list request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub paging: PagingOptions,
    pub search: Option<String>,
    pub sort: Option<SortSpec>,
}

impl ListParams {
    /// Validates the window and resolves the sort token; an empty search becomes `None`.
    pub fn parse(self, sorts: &SortTokens) -> Result<ListQuery, PagingError> {
        let paging = PagingOptions::new(
            self.skip.unwrap_or(0),
            self.take.unwrap_or(DEFAULT_TAKE),
        )?;
        let sort = sorts.resolve(self.sort.as_deref())?;
        let search = self.search.filter(|s| !s.is_empty());

        Ok(ListQuery {
            paging,
            search,
            sort,
        })
    }
}
