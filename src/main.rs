//!
//! Hotel reservation REST API persisted as a flat JSON file.
//! Reads configuration from TOML file (~/.config/reservas-api/config.toml).

use std::sync::Arc;

use tracing::{error, info};

use reservas_api::config::AppConfig;
use reservas_api::domain::ReservationRepository;
use reservas_api::shared::shutdown::ShutdownCoordinator;
use reservas_api::{create_api_router, default_config_path, JsonFileReservationRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("RESERVAS_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting API de Reservas Hoteleras...");

    // ── Reservation storage ────────────────────────────────────
    let repo = JsonFileReservationRepository::new(&app_cfg.storage.data_file);
    if let Err(e) = repo.init().await {
        error!("Failed to initialize reservation storage: {}", e);
        return Err(e.into());
    }
    info!("Reservation file: {}", app_cfg.storage.data_file.display());

    let repo: Arc<dyn ReservationRepository> = Arc::new(repo);

    // ── Shutdown coordination ──────────────────────────────────
    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    let shutdown_signal = shutdown.signal();

    // Start listening for shutdown signals (SIGTERM, SIGINT)
    shutdown.start_signal_listener();

    // ── REST API server ────────────────────────────────────────
    let api_router = create_api_router(repo);

    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    info!("🚀 Server started. Press Ctrl+C to shutdown gracefully.");

    let api_shutdown = shutdown_signal.clone();
    axum::serve(listener, api_router)
        .with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        })
        .await?;

    info!("👋 API de Reservas shutdown complete");
    Ok(())
}
