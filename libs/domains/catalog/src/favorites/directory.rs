//! Client for the users service.
//!
//! The catalog only needs to know whether a user exists before touching
//! their favorites; everything else about users lives upstream.

use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_parse_or_default, env_required};
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::error::{CatalogError, EntityKind};

const SERVICE: &str = "users";

#[derive(Debug, Error)]
pub enum UserLookupError {
    #[error("user {0} not found")]
    NotFound(Uuid),

    #[error("users service unavailable: {0}")]
    Unavailable(String),

    #[error("users service timed out")]
    TimedOut,
}

impl From<UserLookupError> for CatalogError {
    fn from(err: UserLookupError) -> Self {
        match err {
            UserLookupError::NotFound(id) => CatalogError::not_found(EntityKind::User, id),
            UserLookupError::Unavailable(message) => CatalogError::Upstream {
                service: SERVICE,
                message,
            },
            UserLookupError::TimedOut => CatalogError::UpstreamTimeout { service: SERVICE },
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// `Ok(())` when the user exists
    async fn resolve_user(&self, id: Uuid) -> Result<(), UserLookupError>;
}

#[derive(Debug, Clone)]
pub struct UsersServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Environment variables:
/// - `USERS_MICROSERVICE_BASE_URL` (required)
/// - `USERS_MICROSERVICE_TIMEOUT_SECS` (default: 5)
impl FromEnv for UsersServiceConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_required("USERS_MICROSERVICE_BASE_URL")?,
            timeout_secs: env_parse_or_default("USERS_MICROSERVICE_TIMEOUT_SECS", "5")?,
        })
    }
}

/// [`UserDirectory`] over `GET {base_url}/v1/users/{id}`, without retries.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserDirectory {
    pub fn new(config: &UsersServiceConfig) -> Result<Self, reqwest::Error> {
        Self::with_timeout(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn resolve_user(&self, id: Uuid) -> Result<(), UserLookupError> {
        let url = format!("{}/v1/users/{}", self.base_url, id);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                UserLookupError::TimedOut
            } else {
                UserLookupError::Unavailable(e.to_string())
            }
        })?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(UserLookupError::NotFound(id)),
            status => {
                tracing::warn!(user_id = %id, %status, "Unexpected users service response");
                Err(UserLookupError::Unavailable(format!(
                    "unexpected status {status}"
                )))
            }
        }
    }
}
