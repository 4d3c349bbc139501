use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20241101_000002_star_system::StarSystem, m20241101_000003_planet::Planet,
    m20241101_000004_moon::Moon,
};

static IDX_SPACE_STATION_NAME: &str = "idx_space_station_name";
static FK_SPACE_STATION_STAR_SYSTEM_ID: &str = "fk_space_station_star_system_id";
static FK_SPACE_STATION_PLANET_ID: &str = "fk_space_station_planet_id";
static FK_SPACE_STATION_MOON_ID: &str = "fk_space_station_moon_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpaceStation::Table)
                    .if_not_exists()
                    .col(pk_auto(SpaceStation::Id))
                    .col(big_integer(SpaceStation::UexId))
                    .col(string(SpaceStation::Name))
                    .col(string(SpaceStation::Code))
                    .col(integer(SpaceStation::StarSystemId))
                    .col(integer_null(SpaceStation::PlanetId))
                    .col(integer_null(SpaceStation::MoonId))
                    .col(string_null(SpaceStation::PadTypes))
                    .col(string_null(SpaceStation::Jurisdiction))
                    .col(string_null(SpaceStation::Faction))
                    .col(boolean(SpaceStation::HasTradeTerminal))
                    .col(boolean(SpaceStation::HasRefinery))
                    .col(string_null(SpaceStation::Orbit))
                    .col(boolean(SpaceStation::IsLagrange))
                    .col(timestamp(SpaceStation::CreatedAt))
                    .col(timestamp(SpaceStation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SPACE_STATION_STAR_SYSTEM_ID)
                            .from(SpaceStation::Table, SpaceStation::StarSystemId)
                            .to(StarSystem::Table, StarSystem::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SPACE_STATION_PLANET_ID)
                            .from(SpaceStation::Table, SpaceStation::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SPACE_STATION_MOON_ID)
                            .from(SpaceStation::Table, SpaceStation::MoonId)
                            .to(Moon::Table, Moon::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SPACE_STATION_NAME)
                    .table(SpaceStation::Table)
                    .col(SpaceStation::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SPACE_STATION_NAME)
                    .table(SpaceStation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SpaceStation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SpaceStation {
    Table,
    Id,
    UexId,
    Name,
    Code,
    StarSystemId,
    PlanetId,
    MoonId,
    PadTypes,
    Jurisdiction,
    Faction,
    HasTradeTerminal,
    HasRefinery,
    Orbit,
    IsLagrange,
    CreatedAt,
    UpdatedAt,
}
