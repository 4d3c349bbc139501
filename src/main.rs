use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pulsepoint::server::{
    config::Config,
    error::Error,
    model::app::{AppSettings, AppState},
    router,
    scheduler::{Scheduler, SyncSchedule},
    service::sync::SyncLocks,
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let uex_client = startup::build_uex_client(&config)?;
    let db = startup::connect_to_database(&config).await?;
    let (event_queue, _worker) = startup::start_event_worker(db.clone());
    let sync_locks = SyncLocks::new();

    Scheduler::new(
        db.clone(),
        uex_client.clone(),
        sync_locks.clone(),
        config.uex_max_attempts,
    )
    .await?
    .start(&SyncSchedule::from(&config))
    .await?;

    let state = AppState {
        db,
        uex_client,
        event_queue,
        sync_locks,
        settings: AppSettings::from(&config),
    };

    let app = router::routes(state.clone()).with_state(state);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            Error::InternalError(format!(
                "Failed to bind {}: {}",
                config.bind_address, e
            ))
        })?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::InternalError(format!("HTTP server error: {}", e)))?;

    Ok(())
}
