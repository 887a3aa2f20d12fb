//! The set of categories a product belongs to.
//!
//! Writes replace the whole set: the desired category ids are reconciled
//! against the stored links in one transaction, so only the difference is
//! written and a failed request leaves the set untouched.

pub mod entity;
pub mod handlers;
pub mod postgres;
pub mod repository;
pub mod service;

pub use postgres::PgProductCategoryRepository;
pub use repository::{CategoryAssignment, ProductCategoryRepository};
pub use service::ProductCategoryService;
