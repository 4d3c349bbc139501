use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20241101_000001_commodity::Commodity, m20241101_000006_outpost::Outpost};

static IDX_OUTPOST_COMMODITY_OUTPOST_ID: &str = "idx_outpost_commodity_outpost_id";
static FK_OUTPOST_COMMODITY_OUTPOST_ID: &str = "fk_outpost_commodity_outpost_id";
static FK_OUTPOST_COMMODITY_COMMODITY_ID: &str = "fk_outpost_commodity_commodity_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OutpostCommodity::Table)
                    .if_not_exists()
                    .col(pk_auto(OutpostCommodity::Id))
                    .col(integer(OutpostCommodity::OutpostId))
                    .col(integer(OutpostCommodity::CommodityId))
                    .col(double(OutpostCommodity::Amount))
                    .col(timestamp(OutpostCommodity::CreatedAt))
                    .col(timestamp(OutpostCommodity::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_OUTPOST_COMMODITY_OUTPOST_ID)
                            .from(OutpostCommodity::Table, OutpostCommodity::OutpostId)
                            .to(Outpost::Table, Outpost::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_OUTPOST_COMMODITY_COMMODITY_ID)
                            .from(OutpostCommodity::Table, OutpostCommodity::CommodityId)
                            .to(Commodity::Table, Commodity::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OUTPOST_COMMODITY_OUTPOST_ID)
                    .table(OutpostCommodity::Table)
                    .col(OutpostCommodity::OutpostId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OUTPOST_COMMODITY_OUTPOST_ID)
                    .table(OutpostCommodity::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OutpostCommodity::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OutpostCommodity {
    Table,
    Id,
    OutpostId,
    CommodityId,
    Amount,
    CreatedAt,
    UpdatedAt,
}
