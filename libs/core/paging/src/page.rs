use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::options::PagingOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub skip: u64,
    pub take: u64,
    /// Rows matching the filter, ignoring skip and take
    pub total_items_count: u64,
    /// Always equal to `items.len()`
    pub page_items_count: u64,
}

/// One window of a filtered listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, paging: PagingOptions, total_items_count: u64) -> Self {
        let page_items_count = items.len() as u64;
        Self {
            items,
            meta: PageMeta {
                skip: paging.skip(),
                take: paging.take(),
                total_items_count,
                page_items_count,
            },
        }
    }

    pub fn empty(paging: PagingOptions) -> Self {
        Self::new(Vec::new(), paging, 0)
    }

    /// Converts every item, keeping the meta untouched.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Builds a page from rows that are already filtered and ordered in memory.
pub fn paginate<T>(rows: Vec<T>, paging: PagingOptions) -> Page<T> {
    let total = rows.len() as u64;
    let items = rows
        .into_iter()
        .skip(usize::try_from(paging.skip()).unwrap_or(usize::MAX))
        .take(paging.take() as usize)
        .collect();

    Page::new(items, paging, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_page_serializes_camel_case_meta() {
        let page = Page::new(vec!["a"], PagingOptions::new(0, 10).unwrap(), 1);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "items": ["a"],
                "meta": {"skip": 0, "take": 10, "totalItemsCount": 1, "pageItemsCount": 1}
            })
        );
    }

    #[test]
    fn test_skip_past_end_keeps_total() {
        let page = paginate(vec![1, 2, 3], PagingOptions::new(5, 10).unwrap());
        assert!(page.items.is_empty());
        assert_eq!(page.meta.page_items_count, 0);
        assert_eq!(page.meta.total_items_count, 3);
    }

    #[test]
    fn test_map_preserves_meta() {
        let page = paginate(vec![1, 2, 3], PagingOptions::new(1, 1).unwrap());
        let mapped = page.clone().map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["2".to_string()]);
        assert_eq!(mapped.meta, page.meta);
    }

    proptest! {
        #[test]
        fn paginate_counts_are_consistent(
            total in 0usize..300,
            skip in 0u64..400,
            take in 1u64..=100,
        ) {
            let rows: Vec<usize> = (0..total).collect();
            let page = paginate(rows, PagingOptions::new(skip, take).unwrap());

            let expected = take.min((total as u64).saturating_sub(skip));
            prop_assert_eq!(page.meta.page_items_count, expected);
            prop_assert_eq!(page.items.len() as u64, expected);
            prop_assert_eq!(page.meta.total_items_count, total as u64);
            if let Some(first) = page.items.first() {
                prop_assert_eq!(*first as u64, skip);
            }
        }
    }
}
