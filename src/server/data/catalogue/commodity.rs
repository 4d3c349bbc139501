use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uex::model::commodity::Commodity;

use crate::server::service::filter::as_flag;

pub struct CommodityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommodityRepository<'a, C> {
    /// Creates a new instance of [`CommodityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<entity::commodity::Model>, DbErr> {
        entity::prelude::Commodity::find()
            .filter(entity::commodity::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    /// Inserts a commodity fetched from UEX
    pub async fn create(
        &self,
        commodity: Commodity,
    ) -> Result<entity::commodity::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let commodity = entity::commodity::ActiveModel {
            code: ActiveValue::Set(commodity.code),
            name: ActiveValue::Set(commodity.name),
            kind: ActiveValue::Set(commodity.kind),
            price_buy: ActiveValue::Set(commodity.price_buy),
            price_sell: ActiveValue::Set(commodity.price_sell),
            is_illegal: ActiveValue::Set(as_flag(commodity.is_illegal)),
            is_sellable: ActiveValue::Set(as_flag(commodity.is_sellable)),
            is_available_live: ActiveValue::Set(as_flag(commodity.is_available_live)),
            is_temporary: ActiveValue::Set(as_flag(commodity.is_temporary)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        commodity.insert(self.db).await
    }

    /// Overwrites the mutable fields of an existing commodity, the code is left untouched
    pub async fn update(
        &self,
        existing: entity::commodity::Model,
        commodity: Commodity,
    ) -> Result<entity::commodity::Model, DbErr> {
        let mut commodity_am = existing.into_active_model();
        commodity_am.name = ActiveValue::Set(commodity.name);
        commodity_am.kind = ActiveValue::Set(commodity.kind);
        commodity_am.price_buy = ActiveValue::Set(commodity.price_buy);
        commodity_am.price_sell = ActiveValue::Set(commodity.price_sell);
        commodity_am.is_illegal = ActiveValue::Set(as_flag(commodity.is_illegal));
        commodity_am.is_sellable = ActiveValue::Set(as_flag(commodity.is_sellable));
        commodity_am.is_available_live = ActiveValue::Set(as_flag(commodity.is_available_live));
        commodity_am.is_temporary = ActiveValue::Set(as_flag(commodity.is_temporary));
        commodity_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        commodity_am.update(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::commodity::Model>, DbErr> {
        entity::prelude::Commodity::find()
            .order_by_asc(entity::commodity::Column::Id)
            .all(self.db)
            .await
    }
}
