//! Records generated in reaction to outpost events.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        catalogue::commodity::CommodityRepository,
        outpost::{
            commodity_change::CommodityChangeRepository,
            outpost_commodity::OutpostCommodityRepository,
        },
    },
    error::Error,
};

pub struct DerivedRecordService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DerivedRecordService<'a> {
    /// Creates a new instance of [`DerivedRecordService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates one stock row with an amount of 0 for every stored commodity
    ///
    /// Rows are inserted in a single transaction, if any insert fails no rows are created
    /// for the outpost.
    pub async fn create_outpost_commodities(
        &self,
        outpost_id: i32,
    ) -> Result<Vec<entity::outpost_commodity::Model>, Error> {
        let txn = self.db.begin().await?;

        let commodities = CommodityRepository::new(&txn).get_all().await?;
        let outpost_commodity_repo = OutpostCommodityRepository::new(&txn);

        let mut rows = Vec::with_capacity(commodities.len());
        for commodity in commodities {
            let row = outpost_commodity_repo
                .create(outpost_id, commodity.id, 0.0)
                .await
                .map_err(|e| {
                    tracing::error!(
                        outpost_id,
                        commodity = %commodity.code,
                        "Failed to create stock row: {}",
                        e
                    );
                    e
                })?;

            rows.push(row);
        }

        txn.commit().await?;

        Ok(rows)
    }

    /// Appends a change row holding `amount - previous_amount`
    pub async fn record_commodity_change(
        &self,
        outpost_commodity_id: i32,
        commodity_id: i32,
        previous_amount: f64,
        amount: f64,
    ) -> Result<entity::commodity_change::Model, Error> {
        let txn = self.db.begin().await?;

        let change = CommodityChangeRepository::new(&txn)
            .create(outpost_commodity_id, commodity_id, amount - previous_amount)
            .await?;

        txn.commit().await?;

        Ok(change)
    }
}
