use stash_server::{AppState, build_router, logger};

use std::error::Error;
use std::path::PathBuf;

use log::{error, info};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use stash_config::Environment;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = stash_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let config_dir = stash_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting stash-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool. Production requires encrypted transport
    // but relaxes certificate verification; development negotiates
    // opportunistically.
    let ssl_mode = match config.environment {
        Environment::Production => PgSslMode::Require,
        Environment::Development => PgSslMode::Prefer,
    };
    let connect_options = config
        .database
        .url
        .parse::<PgConnectOptions>()?
        .ssl_mode(ssl_mode);

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(connect_options)
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    stash_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    // Build application state and router
    let state = AppState {
        pool,
        static_dir: PathBuf::from(&config.server.static_dir),
        max_body_bytes: config.server.max_body_bytes,
    };
    let app = build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");

    Ok(())
}

/// Resolve when SIGINT arrives, letting in-flight requests finish
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
