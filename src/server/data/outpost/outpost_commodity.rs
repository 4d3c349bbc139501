use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

pub struct OutpostCommodityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OutpostCommodityRepository<'a, C> {
    /// Creates a new instance of [`OutpostCommodityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a stock row linking an outpost to a commodity
    ///
    /// # Notes
    /// - Outpost and commodity IDs must exist due to foreign key constraints
    pub async fn create(
        &self,
        outpost_id: i32,
        commodity_id: i32,
        amount: f64,
    ) -> Result<entity::outpost_commodity::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let outpost_commodity = entity::outpost_commodity::ActiveModel {
            outpost_id: ActiveValue::Set(outpost_id),
            commodity_id: ActiveValue::Set(commodity_id),
            amount: ActiveValue::Set(amount),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        outpost_commodity.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::outpost_commodity::Model>, DbErr> {
        entity::prelude::OutpostCommodity::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds a row and holds an exclusive lock on it until the surrounding transaction ends
    ///
    /// Concurrent updates of the same row are serialised so each one reads the amount left
    /// by the previous. The lock clause is omitted on SQLite, which locks the whole database
    /// for a write transaction instead.
    pub async fn find_by_id_for_update(
        &self,
        id: i32,
    ) -> Result<Option<entity::outpost_commodity::Model>, DbErr> {
        entity::prelude::OutpostCommodity::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Sets the stock amount of a previously fetched row
    pub async fn update_amount(
        &self,
        outpost_commodity: entity::outpost_commodity::Model,
        amount: f64,
    ) -> Result<entity::outpost_commodity::Model, DbErr> {
        let mut outpost_commodity_am = outpost_commodity.into_active_model();
        outpost_commodity_am.amount = ActiveValue::Set(amount);
        outpost_commodity_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        outpost_commodity_am.update(self.db).await
    }

    pub async fn get_by_outpost_id(
        &self,
        outpost_id: i32,
    ) -> Result<Vec<entity::outpost_commodity::Model>, DbErr> {
        entity::prelude::OutpostCommodity::find()
            .filter(entity::outpost_commodity::Column::OutpostId.eq(outpost_id))
            .order_by_asc(entity::outpost_commodity::Column::CommodityId)
            .all(self.db)
            .await
    }
}
