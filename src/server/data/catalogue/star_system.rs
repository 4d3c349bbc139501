use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uex::model::universe::StarSystem;

use crate::server::service::filter::as_flag;

pub struct StarSystemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarSystemRepository<'a, C> {
    /// Creates a new instance of [`StarSystemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<entity::star_system::Model>, DbErr> {
        entity::prelude::StarSystem::find()
            .filter(entity::star_system::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    /// Finds a star system by name, used to resolve the system a space station belongs to
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::star_system::Model>, DbErr> {
        entity::prelude::StarSystem::find()
            .filter(entity::star_system::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        star_system: StarSystem,
    ) -> Result<entity::star_system::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let star_system = entity::star_system::ActiveModel {
            uex_id: ActiveValue::Set(star_system.id),
            code: ActiveValue::Set(star_system.code),
            name: ActiveValue::Set(star_system.name),
            jurisdiction: ActiveValue::Set(star_system.jurisdiction_name),
            faction: ActiveValue::Set(star_system.faction_name),
            is_available: ActiveValue::Set(as_flag(star_system.is_available)),
            is_visible: ActiveValue::Set(as_flag(star_system.is_visible)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        star_system.insert(self.db).await
    }

    pub async fn update(
        &self,
        existing: entity::star_system::Model,
        star_system: StarSystem,
    ) -> Result<entity::star_system::Model, DbErr> {
        let mut star_system_am = existing.into_active_model();
        star_system_am.uex_id = ActiveValue::Set(star_system.id);
        star_system_am.name = ActiveValue::Set(star_system.name);
        star_system_am.jurisdiction = ActiveValue::Set(star_system.jurisdiction_name);
        star_system_am.faction = ActiveValue::Set(star_system.faction_name);
        star_system_am.is_available = ActiveValue::Set(as_flag(star_system.is_available));
        star_system_am.is_visible = ActiveValue::Set(as_flag(star_system.is_visible));
        star_system_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        star_system_am.update(self.db).await
    }
}
