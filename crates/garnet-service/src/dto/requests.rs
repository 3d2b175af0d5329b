//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies that carry user input
//! also implement `Validate`.

use garnet_core::ReportReason;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Report Requests
// ============================================================================

/// Create report request
///
/// `date_time` uses the HTML `datetime-local` shape, `YYYY-MM-DDTHH:MM`
/// (seconds optional). `report_reason` arrives structured; the service
/// encodes it into the stored comma-joined form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReportRequest {
    #[validate(length(min = 1, message = "date_time is required"))]
    pub date_time: String,

    #[validate(length(min = 1, max = 100, message = "Reporter must be 1-100 characters"))]
    pub reporter: String,

    #[validate(length(min = 1, max = 100, message = "Reportee must be 1-100 characters"))]
    pub reportee: String,

    pub report_reason: ReportReason,

    /// Comma-separated links and file paths, may be empty
    #[serde(default)]
    pub evidence: String,

    #[validate(length(min = 1, max = 200, message = "Punishment must be 1-200 characters"))]
    pub punishment: String,
}

/// Update report request - full replacement of all editable fields
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReportRequest {
    #[validate(length(min = 1, message = "date_time is required"))]
    pub date_time: String,

    #[validate(length(min = 1, max = 100, message = "Reporter must be 1-100 characters"))]
    pub reporter: String,

    #[validate(length(min = 1, max = 100, message = "Reportee must be 1-100 characters"))]
    pub reportee: String,

    pub report_reason: ReportReason,

    #[serde(default)]
    pub evidence: String,

    #[validate(length(min = 1, max = 200, message = "Punishment must be 1-200 characters"))]
    pub punishment: String,
}

/// Query parameters for listing reports
///
/// All fields are optional raw strings; the service layer validates and
/// converts them into a typed query specification.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListReportsParams {
    pub search_query: Option<String>,
    pub search_field: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

// ============================================================================
// Ban Requests
// ============================================================================

/// Create ban request (manual entry)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBanRequest {
    #[validate(length(min = 1, max = 100, message = "Date must be 1-100 characters"))]
    pub date: String,

    #[validate(length(min = 1, max = 200, message = "Player name must be 1-200 characters"))]
    pub player_name: String,

    #[validate(length(min = 1, max = 100, message = "Player steam id must be 1-100 characters"))]
    pub player_steam_id: String,

    #[validate(length(min = 1, max = 200, message = "Admin name must be 1-200 characters"))]
    pub admin_name: String,

    #[validate(length(min = 1, max = 100, message = "Admin steam id must be 1-100 characters"))]
    pub admin_steam_id: String,

    #[validate(length(min = 1, max = 100, message = "Length must be 1-100 characters"))]
    pub length: String,

    #[serde(default)]
    pub evidence: String,

    #[validate(length(min = 1, max = 500, message = "Reason must be 1-500 characters"))]
    pub reason: String,
}

/// Trigger a scrape of the external ban listing
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScrapeRequest {
    #[validate(length(min = 1, max = 100, message = "Admin steam id is required"))]
    pub admin_steam_id: String,
}

// ============================================================================
// Settings Requests
// ============================================================================

/// Update the evidence root directory
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    #[validate(length(min = 1, max = 500, message = "Evidence directory must be 1-500 characters"))]
    pub evidence_dir: String,
}
