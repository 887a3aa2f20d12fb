use database::AssociationTable;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::categories::entity as categories;
use crate::products::entity as products;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl AssociationTable for Entity {
    type Parent = products::Entity;
    type Child = categories::Entity;
    type Link = ActiveModel;

    fn parent_column() -> Self::Column {
        Column::ProductId
    }

    fn child_column() -> Self::Column {
        Column::CategoryId
    }

    fn parent_id_column() -> products::Column {
        products::Column::Id
    }

    fn child_id_column() -> categories::Column {
        categories::Column::Id
    }

    fn link(product_id: Uuid, category_id: Uuid) -> Self::Link {
        ActiveModel {
            product_id: Set(product_id),
            category_id: Set(category_id),
        }
    }
}
