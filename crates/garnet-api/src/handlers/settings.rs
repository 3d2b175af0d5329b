//! Settings handlers
//!
//! Endpoints for reading and updating application settings.

use axum::{extract::State, Json};
use garnet_service::{SettingsResponse, SettingsService, UpdateSettingsRequest};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Read current settings
///
/// GET /settings
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Json<SettingsResponse>> {
    let service = SettingsService::new(state.service_context());
    Ok(Json(service.get_settings()))
}

/// Update settings
///
/// PUT /settings
pub async fn update_settings(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateSettingsRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    let service = SettingsService::new(state.service_context());
    let settings = service.update_settings(request)?;
    Ok(Json(settings))
}
