//! kona - a read-only JSON API over a SQLite climate dataset
//!
//! This is the main entry point for the kona application.

use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};

use kona::{init_tracing, log_dataset_stats, log_error, log_timed_operation};
use kona::{AppState, Config, Database, KonaError, Result};

fn main() -> Result<()> {
    // Load configuration
    let (config, database_path) = Config::load()?;

    init_tracing(&config.log_level);

    info!("Starting kona v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(workers) = config.server.workers {
        builder.worker_threads(workers);
    }
    let runtime = builder.build()?;

    runtime.block_on(serve(config, database_path))
}

async fn serve(config: Config, database_path: PathBuf) -> Result<()> {
    info!("Opening database: {:?}", database_path);

    let (database, summary) =
        log_timed_operation("open_database", || Database::open(&database_path)).map_err(|e| {
            log_error(&e, "Failed to open database");
            e
        })?;

    log_dataset_stats(&database_path.display().to_string(), &summary);

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| KonaError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    // Build the router
    let state = AppState::new_shared(config, database);
    let app = kona::router(state);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| KonaError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server is ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| KonaError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
