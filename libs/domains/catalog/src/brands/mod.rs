pub mod entity;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use models::{BRAND_SORTS, Brand, CreateBrand};
pub use postgres::PgBrandRepository;
pub use repository::BrandRepository;
pub use service::BrandService;
