use gradebook_api::api::{router, AppState, GRAPHQL_PATH};
use gradebook_api::config::Config;
use gradebook_api::store::{SeedData, Store};

use std::sync::Arc;
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env file if present; reported once logging is up
    let dotenv_result = dotenvy::dotenv();

    let config = Config::from_env()?;
    let socket_addr = config.socket_addr()?;

    std::fs::create_dir_all(&config.log_dir).unwrap_or_else(|e| {
        eprintln!(
            "Warning: Could not create log directory {}: {}",
            config.log_dir.display(),
            e
        );
    });

    // Daily rotated JSON log file alongside console output
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "gradebook-api.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,gradebook_api=debug")),
        )
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_ansi(false)
                .json()
                .with_writer(non_blocking),
        )
        .init();

    debug!("Logging initialized - log directory: {}", config.log_dir.display());

    if let Err(e) = dotenv_result {
        warn!("No .env file found or error loading it: {}", e);
    }

    info!("Data directory: {}", config.data_dir.display());
    info!("GraphiQL enabled: {}", config.graphiql);
    info!("CORS origins: {:?}", config.cors_origins);

    let seed = SeedData::load(&config.data_dir)?;
    let store = Arc::new(Store::new(seed));
    let state = Arc::new(AppState::new(store, &config));

    let app = router(state, &config);

    let listener = tokio::net::TcpListener::bind(&socket_addr).await?;
    info!("Server running on http://{}{}", socket_addr, GRAPHQL_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
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

    info!("Received shutdown signal");
}
