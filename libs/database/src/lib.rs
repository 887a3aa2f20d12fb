//! PostgreSQL plumbing shared by the catalog services.
//!
//! - [`postgres`]: configuration, pooled connections with retry, migrations, health checks
//! - [`repository`]: a thin generic CRUD helper over a sea-orm entity
//! - [`association`]: atomic replace-the-set reconciliation for many-to-many join tables
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use database::common::RetryConfig;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, Some(RetryConfig::from_env()?)).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "catalog-api").await?;
//! ```

pub mod association;
pub mod common;
pub mod postgres;
pub mod repository;

pub use association::{AssociationDelta, AssociationError, AssociationTable, reconcile};
pub use common::{DatabaseError, DatabaseResult};
pub use repository::BaseRepository;
