use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct CommodityChangeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommodityChangeRepository<'a, C> {
    /// Creates a new instance of [`CommodityChangeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a change row, `change_amount` is the signed difference between the new and
    /// previous stock amount
    pub async fn create(
        &self,
        outpost_commodity_id: i32,
        commodity_id: i32,
        change_amount: f64,
    ) -> Result<entity::commodity_change::Model, DbErr> {
        let commodity_change = entity::commodity_change::ActiveModel {
            outpost_commodity_id: ActiveValue::Set(outpost_commodity_id),
            commodity_id: ActiveValue::Set(commodity_id),
            change_amount: ActiveValue::Set(change_amount),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        commodity_change.insert(self.db).await
    }

    pub async fn get_by_outpost_commodity_id(
        &self,
        outpost_commodity_id: i32,
    ) -> Result<Vec<entity::commodity_change::Model>, DbErr> {
        entity::prelude::CommodityChange::find()
            .filter(entity::commodity_change::Column::OutpostCommodityId.eq(outpost_commodity_id))
            .order_by_asc(entity::commodity_change::Column::Id)
            .all(self.db)
            .await
    }
}
