use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct OutpostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OutpostRepository<'a, C> {
    /// Creates a new instance of [`OutpostRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        star_system_id: Option<i32>,
    ) -> Result<entity::outpost::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let outpost = entity::outpost::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            star_system_id: ActiveValue::Set(star_system_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        outpost.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::outpost::Model>, DbErr> {
        entity::prelude::Outpost::find_by_id(id).one(self.db).await
    }
}
