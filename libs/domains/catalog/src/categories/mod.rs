pub mod entity;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use models::{CATEGORY_SORTS, Category, CreateCategory};
pub use postgres::PgCategoryRepository;
pub use repository::CategoryRepository;
pub use service::CategoryService;
