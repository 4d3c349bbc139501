//! Records inserted directly into the test database, bypassing the services under test.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, fixtures::StoreFixtures};

impl<'a> StoreFixtures<'a> {
    pub async fn insert_mock_commodity(
        &self,
        code: &str,
        name: &str,
    ) -> Result<entity::commodity::Model, TestError> {
        let now = Utc::now().naive_utc();

        let commodity = entity::commodity::ActiveModel {
            code: ActiveValue::Set(code.to_string()),
            name: ActiveValue::Set(name.to_string()),
            kind: ActiveValue::Set("Metal".to_string()),
            price_buy: ActiveValue::Set(100.0),
            price_sell: ActiveValue::Set(120.0),
            is_illegal: ActiveValue::Set(false),
            is_sellable: ActiveValue::Set(true),
            is_available_live: ActiveValue::Set(true),
            is_temporary: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(commodity.insert(&self.context.db).await?)
    }

    pub async fn insert_mock_star_system(
        &self,
        uex_id: i64,
        code: &str,
        name: &str,
    ) -> Result<entity::star_system::Model, TestError> {
        let now = Utc::now().naive_utc();

        let star_system = entity::star_system::ActiveModel {
            uex_id: ActiveValue::Set(uex_id),
            code: ActiveValue::Set(code.to_string()),
            name: ActiveValue::Set(name.to_string()),
            jurisdiction: ActiveValue::Set(None),
            faction: ActiveValue::Set(None),
            is_available: ActiveValue::Set(true),
            is_visible: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(star_system.insert(&self.context.db).await?)
    }

    pub async fn insert_mock_planet(
        &self,
        uex_id: i64,
        code: &str,
        name: &str,
        star_system_id: Option<i32>,
    ) -> Result<entity::planet::Model, TestError> {
        let now = Utc::now().naive_utc();

        let planet = entity::planet::ActiveModel {
            uex_id: ActiveValue::Set(uex_id),
            code: ActiveValue::Set(code.to_string()),
            name: ActiveValue::Set(name.to_string()),
            star_system_id: ActiveValue::Set(star_system_id),
            jurisdiction: ActiveValue::Set(None),
            faction: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(planet.insert(&self.context.db).await?)
    }

    pub async fn insert_mock_moon(
        &self,
        uex_id: i64,
        code: &str,
        name: &str,
        planet_id: i32,
    ) -> Result<entity::moon::Model, TestError> {
        let now = Utc::now().naive_utc();

        let moon = entity::moon::ActiveModel {
            uex_id: ActiveValue::Set(uex_id),
            code: ActiveValue::Set(code.to_string()),
            name: ActiveValue::Set(name.to_string()),
            planet_id: ActiveValue::Set(planet_id),
            star_system_id: ActiveValue::Set(None),
            jurisdiction: ActiveValue::Set(None),
            faction: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(moon.insert(&self.context.db).await?)
    }

    pub async fn insert_mock_outpost(
        &self,
        name: &str,
    ) -> Result<entity::outpost::Model, TestError> {
        let now = Utc::now().naive_utc();

        let outpost = entity::outpost::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            star_system_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(outpost.insert(&self.context.db).await?)
    }

    pub async fn insert_mock_outpost_commodity(
        &self,
        outpost_id: i32,
        commodity_id: i32,
        amount: f64,
    ) -> Result<entity::outpost_commodity::Model, TestError> {
        let now = Utc::now().naive_utc();

        let outpost_commodity = entity::outpost_commodity::ActiveModel {
            outpost_id: ActiveValue::Set(outpost_id),
            commodity_id: ActiveValue::Set(commodity_id),
            amount: ActiveValue::Set(amount),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(outpost_commodity.insert(&self.context.db).await?)
    }
}
