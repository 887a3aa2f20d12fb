use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000004_create_products::Products;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(pk_uuid(Offers::Id))
                    .col(uuid(Offers::ProductId))
                    .col(double(Offers::PricePln))
                    .col(text_null(Offers::Url))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offers_product_id")
                            .from(Offers::Table, Offers::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Serves the per-product MIN(price_pln) join used by price sorting
        manager
            .create_index(
                Index::create()
                    .name("idx_offers_product_id_price_pln")
                    .table(Offers::Table)
                    .col(Offers::ProductId)
                    .col(Offers::PricePln)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Offers {
    Table,
    Id,
    ProductId,
    PricePln,
    Url,
}
