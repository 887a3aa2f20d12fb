use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000004_create_products::Products;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // user_id references the users service, so it carries no foreign key
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteProducts::Table)
                    .if_not_exists()
                    .col(uuid(UserFavoriteProducts::UserId))
                    .col(uuid(UserFavoriteProducts::ProductId))
                    .primary_key(
                        Index::create()
                            .name("pk_user_favorite_products")
                            .col(UserFavoriteProducts::UserId)
                            .col(UserFavoriteProducts::ProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_products_product_id")
                            .from(UserFavoriteProducts::Table, UserFavoriteProducts::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavoriteProducts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserFavoriteProducts {
    Table,
    UserId,
    ProductId,
}
