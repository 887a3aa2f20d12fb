//! Shared application state.

use domain_catalog::favorites::HttpUserDirectory;
use sea_orm::DatabaseConnection;

/// Cloned into every router; all fields are cheap `Arc`-backed handles.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
    /// Client for the users service, used by favorite products
    pub users: HttpUserDirectory,
}
