use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uex::model::universe::Moon;

pub struct MoonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MoonRepository<'a, C> {
    /// Creates a new instance of [`MoonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<entity::moon::Model>, DbErr> {
        entity::prelude::Moon::find()
            .filter(entity::moon::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::moon::Model>, DbErr> {
        entity::prelude::Moon::find()
            .filter(entity::moon::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Inserts a moon fetched from UEX
    ///
    /// # Arguments
    /// - `planet_id`: Record ID of the parent planet, must exist due to foreign key constraint
    /// - `star_system_id`: Record ID of the star system whose scoped fetch returned the moon
    pub async fn create(
        &self,
        moon: Moon,
        planet_id: i32,
        star_system_id: Option<i32>,
    ) -> Result<entity::moon::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let moon = entity::moon::ActiveModel {
            uex_id: ActiveValue::Set(moon.id),
            code: ActiveValue::Set(moon.code),
            name: ActiveValue::Set(moon.name),
            planet_id: ActiveValue::Set(planet_id),
            star_system_id: ActiveValue::Set(star_system_id),
            jurisdiction: ActiveValue::Set(moon.jurisdiction_name),
            faction: ActiveValue::Set(moon.faction_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        moon.insert(self.db).await
    }

    pub async fn update(
        &self,
        existing: entity::moon::Model,
        moon: Moon,
        planet_id: i32,
        star_system_id: Option<i32>,
    ) -> Result<entity::moon::Model, DbErr> {
        let mut moon_am = existing.into_active_model();
        moon_am.uex_id = ActiveValue::Set(moon.id);
        moon_am.name = ActiveValue::Set(moon.name);
        moon_am.planet_id = ActiveValue::Set(planet_id);
        moon_am.star_system_id = ActiveValue::Set(star_system_id);
        moon_am.jurisdiction = ActiveValue::Set(moon.jurisdiction_name);
        moon_am.faction = ActiveValue::Set(moon.faction_name);
        moon_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        moon_am.update(self.db).await
    }
}
