use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarSystem::Table)
                    .if_not_exists()
                    .col(pk_auto(StarSystem::Id))
                    .col(big_integer(StarSystem::UexId))
                    .col(string_uniq(StarSystem::Code))
                    .col(string(StarSystem::Name))
                    .col(string_null(StarSystem::Jurisdiction))
                    .col(string_null(StarSystem::Faction))
                    .col(boolean(StarSystem::IsAvailable))
                    .col(boolean(StarSystem::IsVisible))
                    .col(timestamp(StarSystem::CreatedAt))
                    .col(timestamp(StarSystem::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StarSystem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StarSystem {
    Table,
    Id,
    UexId,
    Code,
    Name,
    Jurisdiction,
    Faction,
    IsAvailable,
    IsVisible,
    CreatedAt,
    UpdatedAt,
}
