//! Substring search predicates.
//!
//! Matching is case-sensitive. `%`, `_` and `\` in the user's term are escaped
//! so they match literally.

use sea_orm::sea_query::LikeExpr;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, Select};

/// Escapes LIKE wildcards in `term`.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// `column LIKE '%term%' ESCAPE '\'`
pub fn contains<C: ColumnTrait>(column: C, term: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(term));
    Condition::all().add(column.like(LikeExpr::new(pattern).escape('\\')))
}

/// Filters `select` by `column` when a non-empty term is given.
pub fn apply<E, C>(select: Select<E>, column: C, term: Option<&str>) -> Select<E>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    match term.filter(|t| !t.is_empty()) {
        Some(term) => select.filter(contains(column, term)),
        None => select,
    }
}

/// In-memory counterpart of [`contains`]; rows without a value never match a term.
pub fn matches(value: Option<&str>, term: Option<&str>) -> bool {
    match term.filter(|t| !t.is_empty()) {
        Some(term) => value.is_some_and(|v| v.contains(term)),
        None => true,
    }
}
