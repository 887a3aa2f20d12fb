use paging::{SortSpec, SortTokens};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::entity;
use crate::slug::validate_slug;

pub static CATEGORY_SORTS: SortTokens = SortTokens::new(&[
    ("name-asc", SortSpec::asc("categories", "name")),
    ("name-desc", SortSpec::desc("categories", "name")),
]);

/// Public view of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
}

impl From<entity::Model> for Category {
    fn from(model: entity::Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug,
            name: model.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 255), custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}
