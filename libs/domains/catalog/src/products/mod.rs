pub mod entity;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use models::{CreateProduct, OFFER_ALIAS, PRODUCT_SORTS, Product};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
