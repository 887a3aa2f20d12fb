use paging::{SortSpec, SortTokens};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::entity;
use crate::slug::validate_slug;

pub static BRAND_SORTS: SortTokens = SortTokens::new(&[
    ("name-asc", SortSpec::asc("brands", "name")),
    ("name-desc", SortSpec::desc("brands", "name")),
]);

/// Public view of a brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
}

impl From<entity::Model> for Brand {
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
pub struct CreateBrand {
    #[validate(length(min = 1, max = 255), custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}
