use sea_orm_migration::{prelude::*, schema::*};

use crate::m20241101_000002_star_system::StarSystem;

static FK_OUTPOST_STAR_SYSTEM_ID: &str = "fk_outpost_star_system_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Outpost::Table)
                    .if_not_exists()
                    .col(pk_auto(Outpost::Id))
                    .col(string(Outpost::Name))
                    .col(integer_null(Outpost::StarSystemId))
                    .col(timestamp(Outpost::CreatedAt))
                    .col(timestamp(Outpost::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_OUTPOST_STAR_SYSTEM_ID)
                            .from(Outpost::Table, Outpost::StarSystemId)
                            .to(StarSystem::Table, StarSystem::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Outpost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Outpost {
    Table,
    Id,
    Name,
    StarSystemId,
    CreatedAt,
    UpdatedAt,
}
