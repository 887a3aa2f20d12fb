use sea_orm::Order;
use sea_orm::sea_query::{Alias, Expr};
use std::cmp::Ordering;

use crate::options::PagingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// A column addressed by table (or join alias) and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortField {
    pub table: &'static str,
    pub column: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn asc(table: &'static str, column: &'static str) -> Self {
        Self {
            field: SortField { table, column },
            direction: SortDirection::Asc,
        }
    }

    pub const fn desc(table: &'static str, column: &'static str) -> Self {
        Self {
            field: SortField { table, column },
            direction: SortDirection::Desc,
        }
    }

    /// Qualified column expression, e.g. `"offer"."price_pln"`.
    pub fn expr(&self) -> Expr {
        Expr::col((Alias::new(self.field.table), Alias::new(self.field.column)))
    }
}

/// Whitelist of sort tokens accepted by one resource.
#[derive(Debug)]
pub struct SortTokens {
    tokens: &'static [(&'static str, SortSpec)],
}

impl SortTokens {
    pub const fn new(tokens: &'static [(&'static str, SortSpec)]) -> Self {
        Self { tokens }
    }

    /// `None` or `""` means no sort; anything not in the whitelist is an error.
    pub fn resolve(&self, token: Option<&str>) -> Result<Option<SortSpec>, PagingError> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        self.tokens
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, spec)| Some(*spec))
            .ok_or_else(|| PagingError::UnknownSortToken {
                token: token.to_string(),
                allowed: self.names(),
            })
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tokens.iter().map(|(name, _)| *name).collect()
    }
}

/// In-memory ordering matching the engine: stable, `None` last in both directions.
pub fn sort_nulls_last<T, K, F>(rows: &mut [T], direction: SortDirection, key: F)
where
    K: PartialOrd,
    F: Fn(&T) -> Option<K>,
{
    rows.sort_by(|a, b| match (key(a), key(b)) {
        (Some(a), Some(b)) => {
            let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
