//! Offset pagination for list endpoints.
//!
//! A request's `skip`/`take`/`search`/`sort` query parameters are parsed into a
//! [`ListQuery`] (bounds checked, sort token resolved against a per-resource
//! whitelist) and executed by [`find_page`], which reads the total count and the
//! requested window from one consistent snapshot.
//!
//! ```ignore
//! static SORTS: SortTokens = SortTokens::new(&[
//!     ("name-asc", SortSpec::asc("brands", "name")),
//!     ("name-desc", SortSpec::desc("brands", "name")),
//! ]);
//!
//! let query = params.parse(&SORTS)?;
//! let select = search::apply(brands::Entity::find(), brands::Column::Name, query.search.as_deref());
//! let page = find_page(&db, select, query.paging, query.sort).await?;
//! ```

mod engine;
mod options;
mod page;
pub mod search;
mod sort;

pub use engine::find_page;
pub use options::{
    DEFAULT_TAKE, ListParams, ListQuery, MAX_SKIP, MAX_TAKE, PagingError, PagingOptions,
};
pub use page::{Page, PageMeta, paginate};
pub use sort::{SortDirection, SortField, SortSpec, SortTokens, sort_nulls_last};
