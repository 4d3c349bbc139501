use sea_orm::DatabaseConnection;

use crate::server::{
    config::{Config, DEFAULT_UEX_MAX_ATTEMPTS},
    service::sync::SyncLocks,
    worker::{handler::RecordEventHandler, EventQueue, EventWorker},
};

/// Settings handlers need at request time.
#[derive(Clone, Debug)]
pub struct AppSettings {
    /// Bearer token admin routes require
    pub admin_token: String,
    /// Answer manual sync triggers with the outcome instead of always reporting success
    pub report_sync_failures: bool,
    pub uex_max_attempts: u32,
}

impl Default for AppSettings {
    /// No admin token, which rejects every admin request.
    fn default() -> Self {
        Self {
            admin_token: String::new(),
            report_sync_failures: false,
            uex_max_attempts: DEFAULT_UEX_MAX_ATTEMPTS,
        }
    }
}

impl From<&Config> for AppSettings {
    fn from(config: &Config) -> Self {
        Self {
            admin_token: config.admin_token.clone(),
            report_sync_failures: config.report_sync_failures,
            uex_max_attempts: config.uex_max_attempts,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub uex_client: uex::Client,
    pub event_queue: EventQueue,
    pub sync_locks: SyncLocks,
    pub settings: AppSettings,
}

/// Builds a state with default settings and spawns an [`EventWorker`] consuming its queue.
///
/// Must be called from within a tokio runtime.
impl From<(DatabaseConnection, uex::Client)> for AppState {
    fn from((db, uex_client): (DatabaseConnection, uex::Client)) -> Self {
        let (event_queue, receiver) = EventQueue::new();
        EventWorker::new(receiver, RecordEventHandler::new(db.clone())).spawn();

        Self {
            db,
            uex_client,
            event_queue,
            sync_locks: SyncLocks::new(),
            settings: AppSettings::default(),
        }
    }
}
