use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uex::model::universe::Planet;

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    /// Finds a planet by name, used to resolve the parent of moons and space stations
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Inserts a planet fetched from UEX
    ///
    /// # Arguments
    /// - `star_system_id`: Record ID of the star system whose scoped fetch returned the planet
    pub async fn create(
        &self,
        planet: Planet,
        star_system_id: Option<i32>,
    ) -> Result<entity::planet::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let planet = entity::planet::ActiveModel {
            uex_id: ActiveValue::Set(planet.id),
            code: ActiveValue::Set(planet.code),
            name: ActiveValue::Set(planet.name),
            star_system_id: ActiveValue::Set(star_system_id),
            jurisdiction: ActiveValue::Set(planet.jurisdiction_name),
            faction: ActiveValue::Set(planet.faction_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn update(
        &self,
        existing: entity::planet::Model,
        planet: Planet,
        star_system_id: Option<i32>,
    ) -> Result<entity::planet::Model, DbErr> {
        let mut planet_am = existing.into_active_model();
        planet_am.uex_id = ActiveValue::Set(planet.id);
        planet_am.name = ActiveValue::Set(planet.name);
        planet_am.star_system_id = ActiveValue::Set(star_system_id);
        planet_am.jurisdiction = ActiveValue::Set(planet.jurisdiction_name);
        planet_am.faction = ActiveValue::Set(planet.faction_name);
        planet_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        planet_am.update(self.db).await
    }
}
