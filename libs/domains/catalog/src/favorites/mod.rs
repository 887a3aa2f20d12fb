pub mod directory;
pub mod entity;
pub mod handlers;
pub mod postgres;
pub mod repository;
pub mod service;

pub use directory::{HttpUserDirectory, UserDirectory, UserLookupError, UsersServiceConfig};
pub use postgres::PgFavoriteProductRepository;
pub use repository::FavoriteProductRepository;
pub use service::FavoriteProductService;
