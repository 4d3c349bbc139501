use sea_orm::{DatabaseConnection, TransactionTrait};
use uex::model::commodity::Commodity;

use crate::server::{
    data::catalogue::commodity::CommodityRepository,
    error::Error,
    service::{
        filter::filter_commodities,
        retry::RetryContext,
        sync::{log_save_error, ReconcileCounts, SyncKind, SyncReport},
    },
};

pub struct CommoditySyncService<'a> {
    db: &'a DatabaseConnection,
    uex_client: &'a uex::Client,
    max_attempts: u32,
}

impl<'a> CommoditySyncService<'a> {
    /// Creates a new instance of [`CommoditySyncService`]
    pub fn new(db: &'a DatabaseConnection, uex_client: &'a uex::Client) -> Self {
        Self {
            db,
            uex_client,
            max_attempts: 1,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Fetches commodities from UEX, filters them and upserts the remainder by code
    ///
    /// All writes happen in one transaction, a single failed write rolls back the whole batch.
    pub async fn sync(&self) -> Result<SyncReport, Error> {
        let mut ctx: RetryContext<Option<Vec<Commodity>>> =
            RetryContext::with_max_attempts(self.max_attempts);

        let counts = ctx
            .execute_with_retry("commodity sync", |retry_cache| {
                let db = self.db.clone();
                let uex_client = self.uex_client.clone();

                Box::pin(async move {
                    let fetched = match retry_cache.as_ref() {
                        Some(cached) => cached.clone(),
                        None => {
                            let fetched = uex_client.commodities().get_commodities().await?;
                            *retry_cache = Some(fetched.clone());
                            fetched
                        }
                    };

                    let fetched_count = fetched.len();
                    let commodities = filter_commodities(fetched);
                    let skipped = fetched_count - commodities.len();

                    let mut counts = reconcile_commodities(&db, commodities).await?;
                    counts.skipped += skipped;

                    Ok(counts)
                })
            })
            .await?;

        let mut report = SyncReport::new(SyncKind::Commodities);
        report.record(counts);

        Ok(report)
    }
}

async fn reconcile_commodities(
    db: &DatabaseConnection,
    commodities: Vec<Commodity>,
) -> Result<ReconcileCounts, Error> {
    let txn = db.begin().await?;
    let commodity_repo = CommodityRepository::new(&txn);
    let mut counts = ReconcileCounts::default();

    for commodity in commodities {
        let code = commodity.code.clone();

        match commodity_repo.find_by_code(&code).await? {
            Some(existing) => {
                commodity_repo
                    .update(existing, commodity)
                    .await
                    .map_err(|e| log_save_error("commodity", &code, e))?;
                counts.updated += 1;
            }
            None => {
                commodity_repo
                    .create(commodity)
                    .await
                    .map_err(|e| log_save_error("commodity", &code, e))?;
                counts.created += 1;
            }
        }
    }

    txn.commit().await?;

    Ok(counts)
}
