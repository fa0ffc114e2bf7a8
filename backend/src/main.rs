//! Backend entry-point: selects the document store, seeds example data and
//! serves the device list API.

mod server;

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use device_list::domain::DeviceEntry;
use device_list::domain::ports::DocumentStore;
use device_list::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use device_list::inbound::http::health::HealthState;
use device_list::inbound::http::state::HttpState;
use device_list::outbound::persistence::{
    DbPool, DieselDocumentStore, InMemoryDocumentStore, PoolConfig, run_migrations,
};
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Settings are read from the environment and configuration files only.
    let program: Vec<OsString> = std::env::args_os().take(1).collect();
    let settings = ServerSettings::load_from_iter(program.clone())
        .map_err(|e| io::Error::other(format!("invalid server settings: {e}")))?;
    let example_data = ExampleDataSettings::load_from_iter(program)
        .map_err(|e| io::Error::other(format!("invalid example data settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let store = build_store(&settings).await?;
    let outcome = seed_example_data_on_startup(&example_data, store.as_ref())
        .await
        .map_err(io::Error::other)?;
    info!(?outcome, "startup seeding finished");

    let health_state = web::Data::new(HealthState::new());
    let http_state = web::Data::new(HttpState::from_store(Arc::clone(&store)));
    let server = create_server(
        health_state.clone(),
        http_state,
        ServerConfig::new(bind_addr),
    )?;
    info!(%bind_addr, "device list server listening");

    let result = server.await;
    health_state.mark_unhealthy();
    if let Err(e) = store.disconnect().await {
        warn!(error = %e, "document store disconnect failed");
    }
    result
}

/// Choose the PostgreSQL store when a database URL is configured, otherwise
/// keep documents in memory.
async fn build_store(
    settings: &ServerSettings,
) -> io::Result<Arc<dyn DocumentStore<DeviceEntry>>> {
    let Some(database_url) = settings.database_url.clone() else {
        info!(store = "memory", "no database configured; documents are not persisted");
        return Ok(Arc::new(InMemoryDocumentStore::<DeviceEntry>::default()));
    };

    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || run_migrations(&migration_url))
        .await
        .map_err(io::Error::other)?
        .map_err(io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size))
        .await
        .map_err(io::Error::other)?;
    info!(
        store = "postgres",
        collection = settings.collection(),
        connections = pool.open_connections(),
        "document store ready"
    );
    Ok(Arc::new(DieselDocumentStore::<DeviceEntry>::new(
        pool,
        settings.collection(),
    )))
}
