use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20241101_000002_star_system::StarSystem, m20241101_000003_planet::Planet};

static IDX_MOON_CODE: &str = "idx_moon_code";
static IDX_MOON_NAME: &str = "idx_moon_name";
static FK_MOON_PLANET_ID: &str = "fk_moon_planet_id";
static FK_MOON_STAR_SYSTEM_ID: &str = "fk_moon_star_system_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Moon::Table)
                    .if_not_exists()
                    .col(pk_auto(Moon::Id))
                    .col(big_integer(Moon::UexId))
                    .col(string(Moon::Code))
                    .col(string(Moon::Name))
                    .col(integer(Moon::PlanetId))
                    .col(integer_null(Moon::StarSystemId))
                    .col(string_null(Moon::Jurisdiction))
                    .col(string_null(Moon::Faction))
                    .col(timestamp(Moon::CreatedAt))
                    .col(timestamp(Moon::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MOON_PLANET_ID)
                            .from(Moon::Table, Moon::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MOON_STAR_SYSTEM_ID)
                            .from(Moon::Table, Moon::StarSystemId)
                            .to(StarSystem::Table, StarSystem::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MOON_CODE)
                    .table(Moon::Table)
                    .col(Moon::Code)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MOON_NAME)
                    .table(Moon::Table)
                    .col(Moon::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_MOON_NAME).table(Moon::Table).to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_MOON_CODE).table(Moon::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Moon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Moon {
    Table,
    Id,
    UexId,
    Code,
    Name,
    PlanetId,
    StarSystemId,
    Jurisdiction,
    Faction,
    CreatedAt,
    UpdatedAt,
}
