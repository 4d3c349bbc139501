use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uex::model::universe::SpaceStation;

use crate::server::service::filter::as_flag;

/// Record IDs a space station is linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceStationLinks {
    pub star_system_id: i32,
    pub planet_id: Option<i32>,
    pub moon_id: Option<i32>,
}

pub struct SpaceStationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpaceStationRepository<'a, C> {
    /// Creates a new instance of [`SpaceStationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Space stations are matched by name rather than code
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::space_station::Model>, DbErr> {
        entity::prelude::SpaceStation::find()
            .filter(entity::space_station::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        space_station: SpaceStation,
        links: SpaceStationLinks,
    ) -> Result<entity::space_station::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let space_station = entity::space_station::ActiveModel {
            uex_id: ActiveValue::Set(space_station.id),
            name: ActiveValue::Set(space_station.name),
            code: ActiveValue::Set(space_station.code),
            star_system_id: ActiveValue::Set(links.star_system_id),
            planet_id: ActiveValue::Set(links.planet_id),
            moon_id: ActiveValue::Set(links.moon_id),
            pad_types: ActiveValue::Set(space_station.pad_types),
            jurisdiction: ActiveValue::Set(space_station.jurisdiction_name),
            faction: ActiveValue::Set(space_station.faction_name),
            has_trade_terminal: ActiveValue::Set(as_flag(space_station.has_trade_terminal)),
            has_refinery: ActiveValue::Set(as_flag(space_station.has_refinery)),
            orbit: ActiveValue::Set(space_station.orbit_name),
            is_lagrange: ActiveValue::Set(as_flag(space_station.is_lagrange)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        space_station.insert(self.db).await
    }

    /// Overwrites the mutable fields of an existing space station, the name is left untouched
    pub async fn update(
        &self,
        existing: entity::space_station::Model,
        space_station: SpaceStation,
        links: SpaceStationLinks,
    ) -> Result<entity::space_station::Model, DbErr> {
        let mut space_station_am = existing.into_active_model();
        space_station_am.uex_id = ActiveValue::Set(space_station.id);
        space_station_am.code = ActiveValue::Set(space_station.code);
        space_station_am.star_system_id = ActiveValue::Set(links.star_system_id);
        space_station_am.planet_id = ActiveValue::Set(links.planet_id);
        space_station_am.moon_id = ActiveValue::Set(links.moon_id);
        space_station_am.pad_types = ActiveValue::Set(space_station.pad_types);
        space_station_am.jurisdiction = ActiveValue::Set(space_station.jurisdiction_name);
        space_station_am.faction = ActiveValue::Set(space_station.faction_name);
        space_station_am.has_trade_terminal =
            ActiveValue::Set(as_flag(space_station.has_trade_terminal));
        space_station_am.has_refinery = ActiveValue::Set(as_flag(space_station.has_refinery));
        space_station_am.orbit = ActiveValue::Set(space_station.orbit_name);
        space_station_am.is_lagrange = ActiveValue::Set(as_flag(space_station.is_lagrange));
        space_station_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        space_station_am.update(self.db).await
    }
}
