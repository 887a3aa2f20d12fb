use core_config::{AppInfo, FromEnv, app_info, env_parse_or_default, server::ServerConfig};
use database::common::RetryConfig;
use database::postgres::PostgresConfig;
use domain_catalog::favorites::UsersServiceConfig;

pub use core_config::Environment;

/// Catalog API configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub retry: RetryConfig,
    pub server: ServerConfig,
    pub users: UsersServiceConfig,
    pub environment: Environment,
    /// `RUN_MIGRATIONS` (default: true)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?;
        let retry = RetryConfig::from_env()?;
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=3000
        let users = UsersServiceConfig::from_env()?; // Required
        let run_migrations = env_parse_or_default("RUN_MIGRATIONS", "true")?;

        Ok(Self {
            app: app_info!(),
            database,
            retry,
            server,
            users,
            environment,
            run_migrations,
        })
    }
}
