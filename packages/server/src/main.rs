//! SmartSchedule API server: loads settings, migrates the database and
//! serves the router until Ctrl-C.

use std::sync::Arc;

use anyhow::Context;
use api::AppState;
use store::PgStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod settings;

use settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let settings = Settings::new().context("failed to load settings")?;

    let store = PgStore::connect(&settings.database_url, settings.max_connections)
        .await
        .context("failed to connect to database")?;
    store.migrate().await.context("failed to run migrations")?;
    info!("database ready");

    let state = AppState::new(Arc::new(store), settings.registration_options());
    let app = api::router(state);

    let address = settings.listen_addr();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("SmartSchedule API listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
