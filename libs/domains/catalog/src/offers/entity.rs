use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use super::models::CreateOffer;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub product_id: Uuid,
    pub price_pln: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn for_product(product_id: Uuid, input: CreateOffer) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            product_id: Set(product_id),
            price_pln: Set(input.price_pln),
            url: Set(input.url),
        }
    }
}
