use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
    SqlErr,
};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use super::AssociationDelta;

/// A join entity linking a parent table to a child table by UUID keys.
///
/// ```ignore
/// impl AssociationTable for product_categories::Entity {
///     type Parent = products::Entity;
///     type Child = categories::Entity;
///     type Link = product_categories::ActiveModel;
///
///     fn parent_column() -> Self::Column { Column::ProductId }
///     fn child_column() -> Self::Column { Column::CategoryId }
///     fn parent_id_column() -> products::Column { products::Column::Id }
///     fn child_id_column() -> categories::Column { categories::Column::Id }
///     fn link(product_id: Uuid, category_id: Uuid) -> Self::Link { .. }
/// }
/// ```
pub trait AssociationTable: EntityTrait {
    type Parent: EntityTrait;
    type Child: EntityTrait;
    type Link: ActiveModelTrait<Entity = Self> + Send;

    /// Join-table column referencing the parent.
    fn parent_column() -> Self::Column;
    /// Join-table column referencing the child.
    fn child_column() -> Self::Column;
    fn parent_id_column() -> <Self::Parent as EntityTrait>::Column;
    fn child_id_column() -> <Self::Child as EntityTrait>::Column;
    fn link(parent_id: Uuid, child_id: Uuid) -> Self::Link;
}

#[derive(Debug, Error)]
pub enum AssociationError {
    #[error("parent {0} not found")]
    ParentNotFound(Uuid),

    /// Every requested child id that does not exist, in request order.
    #[error("children not found: {0:?}")]
    ChildrenNotFound(Vec<Uuid>),

    /// A concurrent writer won a race on the join table.
    #[error("association conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Database(DbErr),
}

impl From<DbErr> for AssociationError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail))
            | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => Self::Conflict(detail),
            _ => Self::Database(err),
        }
    }
}

/// Replaces the children of `parent_id` with `desired`, writing only the delta.
///
/// Run on a transaction: the parent row is locked `FOR NO KEY UPDATE` so
/// reconciliations of the same parent serialize, and children being linked are
/// locked `FOR KEY SHARE` so they cannot vanish before the insert. Any error
/// leaves the join table untouched once the transaction is dropped.
pub async fn reconcile<A, C>(
    conn: &C,
    parent_id: Uuid,
    desired: &[Uuid],
) -> Result<AssociationDelta<Uuid>, AssociationError>
where
    A: AssociationTable,
    C: ConnectionTrait,
{
    let parent: Option<Uuid> = A::Parent::find()
        .select_only()
        .column(A::parent_id_column())
        .filter(A::parent_id_column().eq(parent_id))
        .lock(LockType::NoKeyUpdate)
        .into_tuple()
        .one(conn)
        .await?;

    if parent.is_none() {
        return Err(AssociationError::ParentNotFound(parent_id));
    }

    let current: Vec<Uuid> = A::find()
        .select_only()
        .column(A::child_column())
        .filter(A::parent_column().eq(parent_id))
        .into_tuple()
        .all(conn)
        .await?;

    let delta = AssociationDelta::between(&current, desired);
    if delta.is_noop() {
        debug!(%parent_id, "Association already up to date");
        return Ok(delta);
    }

    if !delta.to_add.is_empty() {
        let found: HashSet<Uuid> = A::Child::find()
            .select_only()
            .column(A::child_id_column())
            .filter(A::child_id_column().is_in(delta.to_add.clone()))
            .lock(LockType::KeyShare)
            .into_tuple::<Uuid>()
            .all(conn)
            .await?
            .into_iter()
            .collect();

        let missing: Vec<Uuid> = delta
            .to_add
            .iter()
            .copied()
            .filter(|id| !found.contains(id))
            .collect();

        if !missing.is_empty() {
            return Err(AssociationError::ChildrenNotFound(missing));
        }
    }

    if !delta.to_remove.is_empty() {
        A::delete_many()
            .filter(A::parent_column().eq(parent_id))
            .filter(A::child_column().is_in(delta.to_remove.clone()))
            .exec(conn)
            .await?;
    }

    if !delta.to_add.is_empty() {
        A::insert_many(delta.to_add.iter().map(|child_id| A::link(parent_id, *child_id)))
            .exec_without_returning(conn)
            .await?;
    }

    debug!(
        %parent_id,
        added = delta.to_add.len(),
        removed = delta.to_remove.len(),
        "Association reconciled"
    );

    Ok(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    mod shelves {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "shelves")]
        pub struct Model {
            #[sea_orm(primary_key, auto_increment = false)]
            pub id: Uuid,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    mod books {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "books")]
        pub struct Model {
            #[sea_orm(primary_key, auto_increment = false)]
            pub id: Uuid,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    mod shelf_books {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "shelf_books")]
        pub struct Model {
            #[sea_orm(primary_key, auto_increment = false)]
            pub shelf_id: Uuid,
            #[sea_orm(primary_key, auto_increment = false)]
            pub book_id: Uuid,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    impl AssociationTable for shelf_books::Entity {
        type Parent = shelves::Entity;
        type Child = books::Entity;
        type Link = shelf_books::ActiveModel;

        fn parent_column() -> Self::Column {
            shelf_books::Column::ShelfId
        }

        fn child_column() -> Self::Column {
            shelf_books::Column::BookId
        }

        fn parent_id_column() -> shelves::Column {
            shelves::Column::Id
        }

        fn child_id_column() -> books::Column {
            books::Column::Id
        }

        fn link(shelf_id: Uuid, book_id: Uuid) -> Self::Link {
            shelf_books::ActiveModel {
                shelf_id: sea_orm::ActiveValue::Set(shelf_id),
                book_id: sea_orm::ActiveValue::Set(book_id),
            }
        }
    }

    fn row(column: &'static str, id: Uuid) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([(column, Value::from(id))])
    }

    fn rows(column: &'static str, ids: &[Uuid]) -> Vec<BTreeMap<&'static str, Value>> {
        ids.iter().map(|id| row(column, *id)).collect()
    }

    #[tokio::test]
    async fn test_missing_parent_is_reported() {
        let shelf = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();

        let err = reconcile::<shelf_books::Entity, _>(&db, shelf, &[Uuid::new_v4()])
            .await
            .unwrap_err();

        assert!(matches!(err, AssociationError::ParentNotFound(id) if id == shelf));

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("FOR NO KEY UPDATE"));
    }

    #[tokio::test]
    async fn test_unchanged_set_issues_no_writes() {
        let (shelf, a, b) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("id", shelf)]])
            .append_query_results([rows("book_id", &[a, b])])
            .into_connection();

        let delta = reconcile::<shelf_books::Entity, _>(&db, shelf, &[b, a, b])
            .await
            .unwrap();

        assert!(delta.is_noop());
        assert_eq!(db.into_transaction_log().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_children_are_all_reported_before_writing() {
        let (shelf, known, ghost_1, ghost_2) =
            (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("id", shelf)]])
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .append_query_results([vec![row("id", known)]])
            .into_connection();

        let err = reconcile::<shelf_books::Entity, _>(&db, shelf, &[ghost_1, known, ghost_2])
            .await
            .unwrap_err();

        match err {
            AssociationError::ChildrenNotFound(ids) => assert_eq!(ids, vec![ghost_1, ghost_2]),
            other => panic!("unexpected error: {other:?}"),
        }

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 3);
        assert!(format!("{:?}", log[2]).contains("FOR KEY SHARE"));
    }

    #[tokio::test]
    async fn test_delta_is_applied_with_delete_then_insert() {
        let (shelf, kept, dropped, added) =
            (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("id", shelf)]])
            .append_query_results([rows("book_id", &[kept, dropped])])
            .append_query_results([vec![row("id", added)]])
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let delta = reconcile::<shelf_books::Entity, _>(&db, shelf, &[kept, added])
            .await
            .unwrap();

        assert_eq!(delta.to_add, vec![added]);
        assert_eq!(delta.to_remove, vec![dropped]);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 5);
        assert!(format!("{:?}", log[3]).contains("DELETE"));
        assert!(format!("{:?}", log[4]).contains("INSERT"));
    }

    #[test]
    fn test_unrelated_database_errors_pass_through() {
        let err = AssociationError::from(DbErr::Custom("disk full".into()));
        assert!(matches!(err, AssociationError::Database(_)));
    }
}
