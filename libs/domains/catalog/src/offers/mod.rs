pub mod entity;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use models::{CreateOffer, Offer};
pub use postgres::PgOfferRepository;
pub use repository::OfferRepository;
pub use service::OfferService;
