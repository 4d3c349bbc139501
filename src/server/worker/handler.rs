use sea_orm::DatabaseConnection;

use crate::server::{
    error::Error, model::event::RecordEvent, service::derived::DerivedRecordService,
};

/// Handler for record events
///
/// Dispatches each event to the derived record generation it triggers.
pub struct RecordEventHandler {
    db: DatabaseConnection,
}

impl RecordEventHandler {
    /// Create a new RecordEventHandler
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Handle an event by delegating to the appropriate handler method
    pub async fn handle(&self, event: &RecordEvent) -> Result<(), Error> {
        match event {
            RecordEvent::OutpostCreated { outpost_id } => {
                self.create_outpost_commodities(*outpost_id).await
            }
            RecordEvent::OutpostCommodityUpdated {
                outpost_commodity_id,
                commodity_id,
                previous_amount,
                amount,
            } => {
                self.record_commodity_change(
                    *outpost_commodity_id,
                    *commodity_id,
                    *previous_amount,
                    *amount,
                )
                .await
            }
        }
    }

    pub async fn create_outpost_commodities(&self, outpost_id: i32) -> Result<(), Error> {
        tracing::debug!("Creating commodity rows for outpost {}", outpost_id);

        let rows = DerivedRecordService::new(&self.db)
            .create_outpost_commodities(outpost_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create commodity rows for outpost {}: {}",
                    outpost_id,
                    e
                );
                e
            })?;

        tracing::debug!(
            "Created {} commodity rows for outpost {}",
            rows.len(),
            outpost_id
        );

        Ok(())
    }

    pub async fn record_commodity_change(
        &self,
        outpost_commodity_id: i32,
        commodity_id: i32,
        previous_amount: f64,
        amount: f64,
    ) -> Result<(), Error> {
        tracing::debug!(
            "Recording change for outpost commodity {}",
            outpost_commodity_id
        );

        DerivedRecordService::new(&self.db)
            .record_commodity_change(outpost_commodity_id, commodity_id, previous_amount, amount)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to record change for outpost commodity {}: {}",
                    outpost_commodity_id,
                    e
                );
                e
            })?;

        Ok(())
    }
}
