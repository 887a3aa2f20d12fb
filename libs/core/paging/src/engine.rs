use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    AccessMode, EntityTrait, FromQueryResult, IsolationLevel, PaginatorTrait, QueryOrder,
    QuerySelect, Select, TransactionSession, TransactionTrait,
};

use crate::options::PagingOptions;
use crate::page::Page;
use crate::sort::SortSpec;

/// Reads one page of `select` together with the total number of matching rows.
///
/// `select` carries the caller's joins and filters. The count and the window
/// are read inside one read-only `REPEATABLE READ` transaction, so both observe
/// the same snapshot. Sorting puts NULLs last; rows that compare equal keep no
/// guaranteed relative order. Without a sort, storage order is used.
pub async fn find_page<E, C>(
    db: &C,
    select: Select<E>,
    paging: PagingOptions,
    sort: Option<SortSpec>,
) -> Result<Page<E::Model>, sea_orm::DbErr>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
    C: TransactionTrait,
{
    let txn = db
        .begin_with_config(
            Some(IsolationLevel::RepeatableRead),
            Some(AccessMode::ReadOnly),
        )
        .await?;

    let total = select.clone().count(&txn).await?;

    let mut window = select;
    if let Some(sort) = sort {
        window = window.order_by_with_nulls(sort.expr(), sort.direction.into(), NullOrdering::Last);
    }

    let items = window
        .offset(paging.skip())
        .limit(paging.take())
        .all(&txn)
        .await?;

    txn.commit().await?;

    tracing::debug!(
        total,
        skip = paging.skip(),
        take = paging.take(),
        returned = items.len(),
        "Fetched page"
    );

    Ok(Page::new(items, paging, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    mod brands {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "brands")]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i32,
            pub name: Option<String>,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    fn count_row(total: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(total)))])
    }

    fn brand_row(id: i32, name: Option<&str>) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("id", Value::Int(Some(id))),
            ("name", Value::from(name.map(str::to_string))),
        ])
    }

    #[tokio::test]
    async fn test_count_and_window_share_filter_in_one_transaction() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(7)]])
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();

        let select = search::apply(brands::Entity::find(), brands::Column::Name, Some("Ac"));
        let paging = PagingOptions::new(20, 10).unwrap();
        let sort = Some(SortSpec::asc("brands", "name"));

        let page = find_page(&db, select, paging, sort).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.meta.skip, 20);
        assert_eq!(page.meta.take, 10);
        assert_eq!(page.meta.total_items_count, 7);
        assert_eq!(page.meta.page_items_count, 0);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);

        let statements = format!("{:?}", log[0]);
        assert!(statements.contains("COUNT(*)"));
        assert_eq!(statements.matches("LIKE").count(), 2);
        assert!(statements.contains("ESCAPE"));
        assert!(statements.contains("ASC NULLS LAST"));
        assert!(statements.contains("OFFSET"));
    }

    #[tokio::test]
    async fn test_unsorted_window_keeps_storage_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(2)]])
            .append_query_results([vec![brand_row(2, Some("Zielnik")), brand_row(1, None)]])
            .into_connection();

        let page = find_page(&db, brands::Entity::find(), PagingOptions::default(), None)
            .await
            .unwrap();

        assert_eq!(page.meta.total_items_count, 2);
        assert_eq!(page.meta.page_items_count, 2);
        assert_eq!(page.items[0].id, 2);
        assert_eq!(page.items[1].name, None);

        let statements = format!("{:?}", db.into_transaction_log());
        assert!(!statements.contains("ORDER BY"));
    }
}
