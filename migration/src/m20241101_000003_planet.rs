use sea_orm_migration::{prelude::*, schema::*};

use crate::m20241101_000002_star_system::StarSystem;

static IDX_PLANET_CODE: &str = "idx_planet_code";
static IDX_PLANET_NAME: &str = "idx_planet_name";
static FK_PLANET_STAR_SYSTEM_ID: &str = "fk_planet_star_system_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(big_integer(Planet::UexId))
                    .col(string(Planet::Code))
                    .col(string(Planet::Name))
                    .col(integer_null(Planet::StarSystemId))
                    .col(string_null(Planet::Jurisdiction))
                    .col(string_null(Planet::Faction))
                    .col(timestamp(Planet::CreatedAt))
                    .col(timestamp(Planet::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLANET_STAR_SYSTEM_ID)
                            .from(Planet::Table, Planet::StarSystemId)
                            .to(StarSystem::Table, StarSystem::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLANET_CODE)
                    .table(Planet::Table)
                    .col(Planet::Code)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLANET_NAME)
                    .table(Planet::Table)
                    .col(Planet::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLANET_NAME)
                    .table(Planet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLANET_CODE)
                    .table(Planet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    UexId,
    Code,
    Name,
    StarSystemId,
    Jurisdiction,
    Faction,
    CreatedAt,
    UpdatedAt,
}
