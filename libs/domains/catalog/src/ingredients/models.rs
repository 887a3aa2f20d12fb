use paging::{SortSpec, SortTokens};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::entity;
use crate::slug::validate_slug;

pub static INGREDIENT_SORTS: SortTokens = SortTokens::new(&[
    ("name-asc", SortSpec::asc("ingredients", "latin_name")),
    ("name-desc", SortSpec::desc("ingredients", "latin_name")),
]);

/// Public view of a ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: Uuid,
    pub slug: String,
    pub latin_name: String,
}

impl From<entity::Model> for Ingredient {
    fn from(model: entity::Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug,
            latin_name: model.latin_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateIngredient {
    #[validate(length(min = 1, max = 255), custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(min = 1, max = 255))]
    pub latin_name: String,
}
