pub use sea_orm_migration::prelude::*;

mod m20241101_000001_commodity;
mod m20241101_000002_star_system;
mod m20241101_000003_planet;
mod m20241101_000004_moon;
mod m20241101_000005_space_station;
mod m20241101_000006_outpost;
mod m20241101_000007_outpost_commodity;
mod m20241101_000008_commodity_change;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241101_000001_commodity::Migration),
            Box::new(m20241101_000002_star_system::Migration),
            Box::new(m20241101_000003_planet::Migration),
            Box::new(m20241101_000004_moon::Migration),
            Box::new(m20241101_000005_space_station::Migration),
            Box::new(m20241101_000006_outpost::Migration),
            Box::new(m20241101_000007_outpost_commodity::Migration),
            Box::new(m20241101_000008_commodity_change::Migration),
        ]
    }
}
