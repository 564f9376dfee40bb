//! Fleet API server.
//!
//! Loads configuration, sets up logging, connects to PostgreSQL and serves
//! the driver and truck endpoints until Ctrl+C or SIGTERM.

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use fleet_api::{AppState, build_app};
use fleet_core::config::AppConfig;
use fleet_core::error::AppError;
use fleet_database::DatabasePool;
use fleet_database::migration::run_migrations;

/// Fleet drivers and trucks API
#[derive(Debug, Parser)]
#[command(name = "fleet-server", version, about, long_about = None)]
struct Cli {
    /// Configuration overlay to load from `config/{env}.toml`
    #[arg(short, long, env = "FLEET_ENV", default_value = "development")]
    env: String,

    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Migrate => migrate(config).await,
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Fatal error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_current_span(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn migrate(config: AppConfig) -> Result<(), AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;
    db.close().await;
    Ok(())
}

async fn serve(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting fleet API");

    let db = DatabasePool::connect(&config.database).await?;
    if config.database.run_migrations {
        run_migrations(db.pool()).await?;
    }

    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app = build_app(AppState::new(config, db.clone()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Shutting down");
    if tokio::time::timeout(grace, db.close()).await.is_err() {
        tracing::warn!("Database pool did not close within the grace period");
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
