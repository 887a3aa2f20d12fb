pub mod entity;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use models::{INGREDIENT_SORTS, Ingredient, CreateIngredient};
pub use postgres::PgIngredientRepository;
pub use repository::IngredientRepository;
pub use service::IngredientService;
