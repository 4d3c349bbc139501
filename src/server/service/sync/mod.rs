//! Synchronisation of UEX reference data into the database.
//!
//! A pass fetches a resource kind, filters it, then reconciles every record against the
//! database by natural key inside one transaction per kind: existing records are updated
//! in place, missing ones are created. Passes of the same [`SyncKind`] never overlap, a
//! trigger arriving while one is running is refused by [`SyncLocks`].

pub mod commodity;
pub mod star_system;

#[cfg(test)]
mod tests;

use std::{fmt, sync::Arc};

use sea_orm::DatabaseConnection;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::{
    model::sync::SyncReportDto,
    server::error::{sync::SyncError, Error},
};

use self::{commodity::CommoditySyncService, star_system::StarSystemSyncService};

/// Resource kinds that can be synchronised independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncKind {
    Commodities,
    StarSystems,
}

impl fmt::Display for SyncKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Commodities => write!(f, "commodity"),
            Self::StarSystems => write!(f, "star system"),
        }
    }
}

/// Record counts of one committed reconciliation transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileCounts {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

/// Outcome of a synchronisation pass.
///
/// Counts only include committed transactions. `failures` holds one description per
/// rolled-back per-system step of a star system pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub kind: SyncKind,
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failures: Vec<String>,
}

impl SyncReport {
    pub fn new(kind: SyncKind) -> Self {
        Self {
            kind,
            created: 0,
            updated: 0,
            skipped: 0,
            failures: Vec::new(),
        }
    }

    /// Whether every step of the pass committed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn record(&mut self, counts: ReconcileCounts) {
        self.created += counts.created;
        self.updated += counts.updated;
        self.skipped += counts.skipped;
    }

    /// Records the outcome of a per-system step, logging failures instead of propagating them.
    pub(crate) fn record_step(
        &mut self,
        star_system_code: &str,
        step: &str,
        result: Result<ReconcileCounts, Error>,
    ) {
        match result {
            Ok(counts) => self.record(counts),
            Err(e) => {
                tracing::error!(
                    star_system = star_system_code,
                    step,
                    "Failed to synchronise {} for star system {}: {}",
                    step,
                    star_system_code,
                    e
                );

                self.failures
                    .push(format!("{} for star system {}: {}", step, star_system_code, e));
            }
        }
    }
}

impl From<SyncReport> for SyncReportDto {
    fn from(report: SyncReport) -> Self {
        Self {
            kind: report.kind.to_string(),
            created: report.created,
            updated: report.updated,
            skipped: report.skipped,
            failures: report.failures,
        }
    }
}

/// Logs a failed write with the natural key of the record before the batch is rolled back.
pub(crate) fn log_save_error(entity: &str, key: &str, e: sea_orm::DbErr) -> sea_orm::DbErr {
    tracing::error!(entity, key, "Failed to save {} {}: {}", entity, key, e);
    e
}

/// Single-flight guard, one lock per [`SyncKind`].
///
/// Clones share the same locks.
#[derive(Clone, Default)]
pub struct SyncLocks {
    commodities: Arc<Mutex<()>>,
    star_systems: Arc<Mutex<()>>,
}

impl SyncLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for `kind` without waiting.
    ///
    /// # Returns
    /// - `Ok(guard)` - No pass of this kind was running, the lock is held until the guard drops
    /// - `Err(SyncError::AlreadyRunning)` - A pass of this kind is in progress
    pub fn try_acquire(&self, kind: SyncKind) -> Result<OwnedMutexGuard<()>, SyncError> {
        let lock = match kind {
            SyncKind::Commodities => &self.commodities,
            SyncKind::StarSystems => &self.star_systems,
        };

        Arc::clone(lock)
            .try_lock_owned()
            .map_err(|_| SyncError::AlreadyRunning(kind))
    }
}

/// Entry point shared by the HTTP triggers and the scheduler.
pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
    uex_client: &'a uex::Client,
    locks: &'a SyncLocks,
    max_attempts: u32,
}

impl<'a> SyncService<'a> {
    /// Creates a new instance of [`SyncService`]
    pub fn new(
        db: &'a DatabaseConnection,
        uex_client: &'a uex::Client,
        locks: &'a SyncLocks,
    ) -> Self {
        Self {
            db,
            uex_client,
            locks,
            max_attempts: 1,
        }
    }

    /// Number of attempts made for each fetch-and-reconcile step.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Runs a pass of `kind` while holding its lock.
    ///
    /// # Returns
    /// - `Ok(SyncReport)` - Pass completed, check [`SyncReport::is_clean`] for per-step failures
    /// - `Err(Error::SyncError)` - A pass of the same kind is already running
    /// - `Err(Error)` - The top-level fetch or reconciliation failed and was rolled back
    pub async fn run(&self, kind: SyncKind) -> Result<SyncReport, Error> {
        let _guard = self.locks.try_acquire(kind)?;

        tracing::info!("Starting {} synchronisation", kind);

        let result = match kind {
            SyncKind::Commodities => {
                CommoditySyncService::new(self.db, self.uex_client)
                    .with_max_attempts(self.max_attempts)
                    .sync()
                    .await
            }
            SyncKind::StarSystems => {
                StarSystemSyncService::new(self.db, self.uex_client)
                    .with_max_attempts(self.max_attempts)
                    .sync()
                    .await
            }
        };

        match &result {
            Ok(report) => tracing::info!(
                created = report.created,
                updated = report.updated,
                skipped = report.skipped,
                failures = report.failures.len(),
                "Finished {} synchronisation",
                kind
            ),
            Err(e) => tracing::error!("Failed {} synchronisation: {}", kind, e),
        }

        result
    }
}
