use anyhow::{Context, Result};
use tracing::info;

use realty_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::init_logging(&config.logging).context("failed to initialize logging")?;
    middleware::init_metrics()?;

    info!("Starting Realty API v{}", env!("CARGO_PKG_VERSION"));

    let pool_config = config.database.pool_config();
    let pool = persistence::db::create_pool(&pool_config).await?;

    // Migrations run inside the configured schema
    persistence::db::ensure_schema(&pool, &pool_config.schema).await?;
    info!(schema = %pool_config.schema, "Running database migrations...");
    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await?;
    info!("Migrations completed");

    let addr = config
        .socket_addr()
        .context("invalid server listen address")?;
    let app = app::create_app(config, pool.clone());

    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
