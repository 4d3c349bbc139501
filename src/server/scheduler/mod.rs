//! Scheduler for periodic UEX synchronisation.
//!
//! Registers one cron job per [`SyncKind`]. Jobs go through the same [`SyncService`] and
//! [`SyncLocks`] as the manual triggers, so a scheduled pass never overlaps a manual one of
//! the same kind.

pub mod config;


use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::Config,
    error::Error,
    service::sync::{SyncKind, SyncLocks, SyncService},
};

use self::config::{commodity as commodity_config, star_system as star_system_config};

/// Cron expressions of the scheduled passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSchedule {
    pub commodities: String,
    pub star_systems: String,
}

impl Default for SyncSchedule {
    fn default() -> Self {
        Self {
            commodities: commodity_config::CRON_EXPRESSION.to_string(),
            star_systems: star_system_config::CRON_EXPRESSION.to_string(),
        }
    }
}

impl From<&Config> for SyncSchedule {
    /// Defaults overridden by `COMMODITY_SYNC_CRON` and `STAR_SYSTEM_SYNC_CRON`.
    fn from(config: &Config) -> Self {
        let defaults = Self::default();

        Self {
            commodities: config
                .commodity_sync_cron
                .clone()
                .unwrap_or(defaults.commodities),
            star_systems: config
                .star_system_sync_cron
                .clone()
                .unwrap_or(defaults.star_systems),
        }
    }
}

/// Job scheduler running synchronisation passes.
pub struct Scheduler {
    db: DatabaseConnection,
    uex_client: uex::Client,
    locks: SyncLocks,
    max_attempts: u32,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `locks` - Locks shared with the HTTP triggers
    /// - `max_attempts` - Attempts made for each fetch-and-reconcile step
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Scheduler ready for job registration
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(
        db: DatabaseConnection,
        uex_client: uex::Client,
        locks: SyncLocks,
        max_attempts: u32,
    ) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;

        Ok(Self {
            db,
            uex_client,
            locks,
            max_attempts,
            sched,
        })
    }

    /// Registers both synchronisation jobs and starts the scheduler.
    ///
    /// # Returns
    /// - `Ok(())` - Jobs registered and scheduler started
    /// - `Err(Error)` - Invalid cron expression or scheduler error
    pub async fn start(mut self, schedule: &SyncSchedule) -> Result<(), Error> {
        self.schedule_sync(&schedule.commodities, SyncKind::Commodities)
            .await?;
        self.schedule_sync(&schedule.star_systems, SyncKind::StarSystems)
            .await?;

        self.sched.start().await?;

        tracing::info!(
            commodities = %schedule.commodities,
            star_systems = %schedule.star_systems,
            "Synchronisation scheduler started"
        );

        Ok(())
    }

    /// Schedules a recurring pass of `kind`.
    ///
    /// On execution the job logs the outcome, errors never leave the job.
    ///
    /// # Returns
    /// - `Ok(())` - Job registered with the scheduler
    /// - `Err(Error)` - Invalid cron expression or scheduler error
    pub async fn schedule_sync(&mut self, cron: &str, kind: SyncKind) -> Result<(), Error> {
        let db = self.db.clone();
        let uex_client = self.uex_client.clone();
        let locks = self.locks.clone();
        let max_attempts = self.max_attempts;

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let uex_client = uex_client.clone();
                let locks = locks.clone();

                Box::pin(async move {
                    let result = SyncService::new(&db, &uex_client, &locks)
                        .with_max_attempts(max_attempts)
                        .run(kind)
                        .await;

                    match result {
                        Ok(report) if !report.is_clean() => tracing::warn!(
                            "Scheduled {} synchronisation finished with {} failed step(s)",
                            kind,
                            report.failures.len()
                        ),
                        Ok(_) => tracing::debug!("Scheduled {} synchronisation finished", kind),
                        Err(e) => {
                            tracing::error!("Scheduled {} synchronisation failed: {:?}", kind, e)
                        }
                    }
                })
            })?)
            .await?;

        tracing::debug!(cron, "Scheduled {} synchronisation", kind);

        Ok(())
    }
}
