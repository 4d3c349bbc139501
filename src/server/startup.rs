use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;

use crate::server::{
    config::Config,
    error::Error,
    worker::{EventQueue, EventWorker, RecordEventHandler},
};

/// Build and configure the UEX client with the provided credentials
pub fn build_uex_client(config: &Config) -> Result<uex::Client, Error> {
    let uex_client = uex::Client::builder()
        .base_url(&config.uex_api_url)
        .api_key(&config.uex_api_key)
        .user_agent(&config.user_agent)
        .build()?;

    Ok(uex_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Create the event queue and spawn the worker consuming it
pub fn start_event_worker(db: DatabaseConnection) -> (EventQueue, JoinHandle<()>) {
    let (event_queue, receiver) = EventQueue::new();
    let handle = EventWorker::new(receiver, RecordEventHandler::new(db)).spawn();

    (event_queue, handle)
}
