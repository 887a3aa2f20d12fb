use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use super::models::CreateBrand;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "brands")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text", unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<CreateBrand> for ActiveModel {
    fn from(input: CreateBrand) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            slug: Set(input.slug),
            name: Set(input.name),
        }
    }
}
