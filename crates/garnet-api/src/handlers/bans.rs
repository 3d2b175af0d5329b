//! Ban handlers
//!
//! Endpoints for ban records and the scrape trigger.

use axum::{
    extract::{Path, State},
    Json,
};
use garnet_service::{
    BanResponse, BanService, CreateBanRequest, ScrapeRequest, ScrapeResponse, ScrapeService,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all bans
///
/// GET /bans
pub async fn list_bans(State(state): State<AppState>) -> ApiResult<Json<Vec<BanResponse>>> {
    let service = BanService::new(state.service_context());
    let bans = service.list_bans().await?;
    Ok(Json(bans))
}

/// Get ban by ID
///
/// GET /bans/{ban_id}
pub async fn get_ban(
    State(state): State<AppState>,
    Path(ban_id): Path<i64>,
) -> ApiResult<Json<BanResponse>> {
    let service = BanService::new(state.service_context());
    let ban = service.get_ban(ban_id).await?;
    Ok(Json(ban))
}

/// Record a ban manually
///
/// POST /bans
pub async fn create_ban(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateBanRequest>,
) -> ApiResult<Created<Json<BanResponse>>> {
    let service = BanService::new(state.service_context());
    let ban = service.create_ban(request).await?;
    Ok(Created(Json(ban)))
}

/// Delete ban
///
/// DELETE /bans/{ban_id}
pub async fn delete_ban(
    State(state): State<AppState>,
    Path(ban_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = BanService::new(state.service_context());
    service.delete_ban(ban_id).await?;
    Ok(NoContent)
}

/// Scrape the external ban listing for an admin's bans
///
/// POST /bans/scrape
pub async fn scrape_bans(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ScrapeRequest>,
) -> ApiResult<Json<ScrapeResponse>> {
    let service = ScrapeService::new(state.service_context());
    let outcome = service.scrape_bans(request).await?;
    Ok(Json(outcome))
}
