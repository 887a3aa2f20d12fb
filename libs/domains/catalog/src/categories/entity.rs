use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use super::models::CreateCategory;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
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

impl From<CreateCategory> for ActiveModel {
    fn from(input: CreateCategory) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            slug: Set(input.slug),
            name: Set(input.name),
        }
    }
}
