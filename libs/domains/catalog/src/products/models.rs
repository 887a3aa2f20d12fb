use paging::{SortSpec, SortTokens};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::entity;
use crate::slug::validate_slug;

/// Alias of the per-product lowest offer price join
pub const OFFER_ALIAS: &str = "offer";

pub static PRODUCT_SORTS: SortTokens = SortTokens::new(&[
    ("price-asc", SortSpec::asc(OFFER_ALIAS, "price_pln")),
    ("price-desc", SortSpec::desc(OFFER_ALIAS, "price_pln")),
    ("name-asc", SortSpec::asc("products", "name")),
    ("name-desc", SortSpec::desc("products", "name")),
]);

/// Public view of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub slug: String,
    pub name: Option<String>,
    pub mass_kilograms: Option<f64>,
    pub volume_liters: Option<f64>,
    pub brand_id: Option<Uuid>,
}

impl From<entity::Model> for Product {
    fn from(model: entity::Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug,
            name: model.name,
            mass_kilograms: model.mass_kilograms,
            volume_liters: model.volume_liters,
            brand_id: model.brand_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255), custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub mass_kilograms: Option<f64>,
    #[validate(range(min = 0.0))]
    pub volume_liters: Option<f64>,
    /// Must reference an existing brand
    pub brand_id: Option<Uuid>,
}
