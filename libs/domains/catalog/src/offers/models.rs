use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::entity;

/// A shop's price for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: Uuid,
    pub product_id: Uuid,
    pub price_pln: f64,
    pub url: Option<String>,
}

impl From<entity::Model> for Offer {
    fn from(model: entity::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            price_pln: model.price_pln,
            url: model.url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateOffer {
    #[validate(range(min = 0.0))]
    pub price_pln: f64,
    #[validate(url)]
    pub url: Option<String>,
}
