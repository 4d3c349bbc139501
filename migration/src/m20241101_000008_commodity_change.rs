use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20241101_000001_commodity::Commodity, m20241101_000007_outpost_commodity::OutpostCommodity,
};

static IDX_COMMODITY_CHANGE_OUTPOST_COMMODITY_ID: &str =
    "idx_commodity_change_outpost_commodity_id";
static FK_COMMODITY_CHANGE_OUTPOST_COMMODITY_ID: &str =
    "fk_commodity_change_outpost_commodity_id";
static FK_COMMODITY_CHANGE_COMMODITY_ID: &str = "fk_commodity_change_commodity_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommodityChange::Table)
                    .if_not_exists()
                    .col(pk_auto(CommodityChange::Id))
                    .col(integer(CommodityChange::OutpostCommodityId))
                    .col(integer(CommodityChange::CommodityId))
                    .col(double(CommodityChange::ChangeAmount))
                    .col(timestamp(CommodityChange::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMODITY_CHANGE_OUTPOST_COMMODITY_ID)
                            .from(CommodityChange::Table, CommodityChange::OutpostCommodityId)
                            .to(OutpostCommodity::Table, OutpostCommodity::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMODITY_CHANGE_COMMODITY_ID)
                            .from(CommodityChange::Table, CommodityChange::CommodityId)
                            .to(Commodity::Table, Commodity::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMODITY_CHANGE_OUTPOST_COMMODITY_ID)
                    .table(CommodityChange::Table)
                    .col(CommodityChange::OutpostCommodityId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMODITY_CHANGE_OUTPOST_COMMODITY_ID)
                    .table(CommodityChange::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CommodityChange::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CommodityChange {
    Table,
    Id,
    OutpostCommodityId,
    CommodityId,
    ChangeAmount,
    CreatedAt,
}
