//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use garnet_common::{AppConfig, AppError};
use garnet_db::{create_pool, run_migrations, SqliteBanRepository, SqliteReportRepository};
use garnet_scrape::{HttpPageFetcher, PageFetcher, ScrapeConfig, ScrapeCoordinator};
use garnet_service::{ImportService, ServiceContext, SettingsStore};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let api = apply_middleware(
        create_router(),
        &state.config().rate_limit,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    // Health endpoints sit outside the rate limiter so probes never 429.
    api.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to SQLite...");
    let db_config = garnet_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("SQLite connection established, migrations applied");

    // Create repositories
    let report_repo = Arc::new(SqliteReportRepository::new(pool.clone()));
    let ban_repo = Arc::new(SqliteBanRepository::new(pool.clone()));

    // Create the scrape pipeline
    let fetcher: Arc<dyn PageFetcher> = Arc::new(
        HttpPageFetcher::new(
            &config.scrape.base_url,
            Duration::from_secs(config.scrape.timeout_secs),
        )
        .map_err(|e| AppError::Config(e.to_string()))?,
    );
    let scrape_coordinator = Arc::new(ScrapeCoordinator::new(
        fetcher,
        ScrapeConfig {
            max_pages: config.scrape.max_pages,
            concurrency: config.scrape.concurrency,
        },
    ));

    // Load persisted settings
    let settings = Arc::new(SettingsStore::load(
        &config.storage.settings_file,
        &config.storage.evidence_dir,
    ));

    let service_context = ServiceContext::new(
        pool,
        report_repo,
        ban_repo,
        scrape_coordinator,
        settings,
        config.storage.clone(),
    );

    // One-shot legacy import; a failure here should not block startup.
    match ImportService::new(&service_context)
        .import_legacy_reports()
        .await
    {
        Ok(0) => {}
        Ok(imported) => info!(imported, "Imported legacy reports"),
        Err(e) => warn!(error = %e, "Legacy report import failed"),
    }

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
