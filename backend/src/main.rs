use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use workday_backend::{
    config::Config,
    repositories::{FileStore, KeyValueStore},
    routes,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workday_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        storage_dir = %config.storage_dir.display(),
        cors_allow_origins = ?config.cors_allow_origins,
        include_baseline = config.include_baseline,
        "Loaded configuration from environment/.env"
    );

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.storage_dir.clone()));
    let addr = config.bind_addr()?;
    let state = AppState::new(store, config);

    state.overrides.migrate_legacy().await?;
    tracing::info!(
        baseline_entries = state.overrides.baseline().len(),
        "Override baseline ready"
    );

    let app = routes::router(state);

    // Start server
    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
