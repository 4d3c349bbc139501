use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::outpost::{outpost::OutpostRepository, outpost_commodity::OutpostCommodityRepository},
    error::Error,
    model::event::RecordEvent,
    worker::EventQueue,
};

/// Writes to outposts and their stock rows, publishing a [`RecordEvent`] after each commit.
///
/// A write that committed is returned even when its event can't be queued, the failure is
/// logged and the derived records for it are not generated.
pub struct OutpostService<'a> {
    db: &'a DatabaseConnection,
    events: &'a EventQueue,
}

impl<'a> OutpostService<'a> {
    /// Creates a new instance of [`OutpostService`]
    pub fn new(db: &'a DatabaseConnection, events: &'a EventQueue) -> Self {
        Self { db, events }
    }

    /// Creates an outpost and publishes [`RecordEvent::OutpostCreated`]
    pub async fn create(
        &self,
        name: &str,
        star_system_id: Option<i32>,
    ) -> Result<entity::outpost::Model, Error> {
        let txn = self.db.begin().await?;
        let outpost = OutpostRepository::new(&txn)
            .create(name, star_system_id)
            .await?;
        txn.commit().await?;

        tracing::info!(outpost_id = outpost.id, "Created outpost {}", outpost.name);

        self.publish(RecordEvent::OutpostCreated {
            outpost_id: outpost.id,
        });

        Ok(outpost)
    }

    /// Sets the stock amount of an outpost commodity and publishes
    /// [`RecordEvent::OutpostCommodityUpdated`] with the amount before the update
    ///
    /// # Returns
    /// - `Ok(Some(row))` - Updated row
    /// - `Ok(None)` - No outpost commodity with this ID
    pub async fn update_commodity_amount(
        &self,
        outpost_commodity_id: i32,
        amount: f64,
    ) -> Result<Option<entity::outpost_commodity::Model>, Error> {
        let txn = self.db.begin().await?;
        let outpost_commodity_repo = OutpostCommodityRepository::new(&txn);

        let Some(previous) = outpost_commodity_repo
            .find_by_id_for_update(outpost_commodity_id)
            .await?
        else {
            return Ok(None);
        };
        let previous_amount = previous.amount;

        let updated = outpost_commodity_repo
            .update_amount(previous, amount)
            .await?;

        txn.commit().await?;

        self.publish(RecordEvent::OutpostCommodityUpdated {
            outpost_commodity_id: updated.id,
            commodity_id: updated.commodity_id,
            previous_amount,
            amount: updated.amount,
        });

        Ok(Some(updated))
    }

    /// Gets the stock rows of an outpost
    ///
    /// # Returns
    /// - `Ok(Some(rows))` - Stock rows ordered by commodity
    /// - `Ok(None)` - No outpost with this ID
    pub async fn get_commodities(
        &self,
        outpost_id: i32,
    ) -> Result<Option<Vec<entity::outpost_commodity::Model>>, Error> {
        if OutpostRepository::new(self.db)
            .find_by_id(outpost_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let rows = OutpostCommodityRepository::new(self.db)
            .get_by_outpost_id(outpost_id)
            .await?;

        Ok(Some(rows))
    }

    fn publish(&self, event: RecordEvent) {
        if let Err(e) = self.events.publish(event) {
            tracing::error!("Derived records will not be generated: {}", e);
        }
    }
}
