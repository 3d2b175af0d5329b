//! Report handlers
//!
//! Endpoints for report CRUD, search, and statistics.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use garnet_service::{
    CreateReportRequest, ListReportsParams, ReportResponse, ReportService, StatsResponse,
    StatsService, UpdateReportRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List reports with optional search and sort parameters
///
/// GET /reports
pub async fn list_reports(
    State(state): State<AppState>,
    Query(params): Query<ListReportsParams>,
) -> ApiResult<Json<Vec<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    let reports = service.list_reports(params).await?;
    Ok(Json(reports))
}

/// Get report by ID
///
/// GET /reports/{report_id}
pub async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<i64>,
) -> ApiResult<Json<ReportResponse>> {
    let service = ReportService::new(state.service_context());
    let report = service.get_report(report_id).await?;
    Ok(Json(report))
}

/// Create report
///
/// POST /reports
pub async fn create_report(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateReportRequest>,
) -> ApiResult<Created<Json<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    let report = service.create_report(request).await?;
    Ok(Created(Json(report)))
}

/// Update report
///
/// PUT /reports/{report_id}
pub async fn update_report(
    State(state): State<AppState>,
    Path(report_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateReportRequest>,
) -> ApiResult<Json<ReportResponse>> {
    let service = ReportService::new(state.service_context());
    let report = service.update_report(report_id, request).await?;
    Ok(Json(report))
}

/// Delete report
///
/// DELETE /reports/{report_id}
pub async fn delete_report(
    State(state): State<AppState>,
    Path(report_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = ReportService::new(state.service_context());
    service.delete_report(report_id).await?;
    Ok(NoContent)
}

/// Aggregate report statistics
///
/// GET /reports/stats
pub async fn report_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let service = StatsService::new(state.service_context());
    let stats = service.report_stats().await?;
    Ok(Json(stats))
}
