//! Catalog Server - Main entry point.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use catalog_service::CatalogServiceModule;
use clap::Parser;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tokio::signal;
use tower_http::trace::TraceLayer;

mod config;
mod logging;

use config::{AppConfig, DatabaseConfig};

#[derive(Debug, Parser)]
#[command(name = "catalog-server", about = "Serve the product catalog over HTTP")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Apply migrations before serving
    #[arg(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.migrate {
        config.catalog.migrate_on_start = true;
    }

    logging::init(&config.logging)?;
    tracing::info!("Starting Catalog Server");

    let db = connect(&config.database).await?;

    let module = CatalogServiceModule::new(Arc::new(db), config.catalog.clone());
    module.init().await?;

    let app = module
        .register_rest(Router::new())?
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "Catalog server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Catalog server stopped");
    Ok(())
}

/// Open the pooled store connection; the DSN itself is never logged
async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let dsn = cfg
        .dsn
        .as_deref()
        .context("database.dsn is not set (use DSN or CATALOG__DATABASE__DSN)")?;

    let mut opts = ConnectOptions::new(dsn);
    opts.max_connections(cfg.max_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .context("failed to connect to database")?;
    tracing::info!(backend = ?db.get_database_backend(), "Connected to database");

    Ok(db)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
