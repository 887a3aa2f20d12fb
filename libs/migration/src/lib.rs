pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_brands;
mod m20250301_000002_create_categories;
mod m20250301_000003_create_ingredients;
mod m20250301_000004_create_products;
mod m20250301_000005_create_offers;
mod m20250301_000006_create_product_categories;
mod m20250301_000007_create_user_favorite_products;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_brands::Migration),
            Box::new(m20250301_000002_create_categories::Migration),
            Box::new(m20250301_000003_create_ingredients::Migration),
            Box::new(m20250301_000004_create_products::Migration),
            Box::new(m20250301_000005_create_offers::Migration),
            Box::new(m20250301_000006_create_product_categories::Migration),
            Box::new(m20250301_000007_create_user_favorite_products::Migration),
        ]
    }
}
