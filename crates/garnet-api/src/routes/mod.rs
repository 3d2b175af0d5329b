//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{bans, evidence, health, reports, settings};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(report_routes())
        .merge(ban_routes())
        .merge(evidence_routes())
        .merge(settings_routes())
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(reports::list_reports))
        .route("/reports", post(reports::create_report))
        .route("/reports/stats", get(reports::report_stats))
        .route("/reports/:report_id", get(reports::get_report))
        .route("/reports/:report_id", put(reports::update_report))
        .route("/reports/:report_id", delete(reports::delete_report))
}

/// Ban routes
fn ban_routes() -> Router<AppState> {
    Router::new()
        .route("/bans", get(bans::list_bans))
        .route("/bans", post(bans::create_ban))
        .route("/bans/scrape", post(bans::scrape_bans))
        .route("/bans/:ban_id", get(bans::get_ban))
        .route("/bans/:ban_id", delete(bans::delete_ban))
}

/// Evidence file routes
fn evidence_routes() -> Router<AppState> {
    Router::new().route("/evidence/*path", get(evidence::get_evidence))
}

/// Settings routes
fn settings_routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(settings::get_settings))
        .route("/settings", put(settings::update_settings))
}
