use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use super::models::CreateProduct;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub name: Option<String>,
    pub mass_kilograms: Option<f64>,
    pub volume_liters: Option<f64>,
    pub brand_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<CreateProduct> for ActiveModel {
    fn from(input: CreateProduct) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            slug: Set(input.slug),
            name: Set(input.name),
            mass_kilograms: Set(input.mass_kilograms),
            volume_liters: Set(input.volume_liters),
            brand_id: Set(input.brand_id),
        }
    }
}
