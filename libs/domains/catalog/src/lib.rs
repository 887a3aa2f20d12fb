//! Catalog Domain
//!
//! Products, brands, categories and ingredients, plus the relations between
//! them: offers, product categories and user favorite products.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, OpenAPI
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, sort whitelists, error mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + Postgres and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Entity    │  ← Sea-ORM models, public views, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{InMemoryCatalog, brands};
//!
//! let catalog = InMemoryCatalog::new();
//! let router = brands::handlers::router(brands::BrandService::new(catalog));
//! ```

pub mod brands;
pub mod categories;
pub mod error;
pub mod favorites;
pub mod ingredients;
pub mod memory;
pub mod offers;
pub mod product_categories;
pub mod products;
mod slug;

pub use error::{CatalogError, CatalogResult, EntityKind};
pub use memory::InMemoryCatalog;
