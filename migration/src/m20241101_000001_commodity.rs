use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Commodity::Table)
                    .if_not_exists()
                    .col(pk_auto(Commodity::Id))
                    .col(string_uniq(Commodity::Code))
                    .col(string(Commodity::Name))
                    .col(string(Commodity::Kind))
                    .col(double(Commodity::PriceBuy))
                    .col(double(Commodity::PriceSell))
                    .col(boolean(Commodity::IsIllegal))
                    .col(boolean(Commodity::IsSellable))
                    .col(boolean(Commodity::IsAvailableLive))
                    .col(boolean(Commodity::IsTemporary))
                    .col(timestamp(Commodity::CreatedAt))
                    .col(timestamp(Commodity::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Commodity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Commodity {
    Table,
    Id,
    Code,
    Name,
    Kind,
    PriceBuy,
    PriceSell,
    IsIllegal,
    IsSellable,
    IsAvailableLive,
    IsTemporary,
    CreatedAt,
    UpdatedAt,
}
