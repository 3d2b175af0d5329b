//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Derived fields
//! (`ban_status`, classified evidence) are computed here at mapping time and
//! are never read from storage.

use chrono::NaiveDateTime;
use garnet_core::{
    classify_evidence, Ban, BanStatus, EvidenceEntry, LabelCount, Report, ReportReason,
};
use serde::Serialize;

/// Timestamp rendering used across report responses. Seconds are kept so
/// second-precision input survives the round trip.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Report Responses
// ============================================================================

/// A report with its derived ban status, structured reason, and classified
/// evidence
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub id: i64,
    pub date_time: String,
    pub reporter: String,
    pub reportee: String,
    pub report_reason: ReportReason,
    pub evidence: Vec<EvidenceEntry>,
    pub punishment: String,
    pub ban_status: BanStatus,
}

impl ReportResponse {
    /// Map a report, evaluating ban status against the supplied clock value.
    /// The stored comma-joined reason is decoded back into its tag list.
    pub fn from_report(report: Report, now: NaiveDateTime) -> Self {
        let ban_status = BanStatus::evaluate(&report.punishment, report.date_time, now);
        Self {
            id: report.id,
            date_time: report.date_time.format(DATE_TIME_FORMAT).to_string(),
            reporter: report.reporter,
            reportee: report.reportee,
            report_reason: ReportReason::parse_field(&report.report_reason),
            evidence: classify_evidence(&report.evidence),
            punishment: report.punishment,
            ban_status,
        }
    }
}

/// Aggregate report statistics
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_reports: i64,
    pub by_reporter: Vec<LabelCount>,
    pub by_reportee: Vec<LabelCount>,
    pub by_reason: Vec<LabelCount>,
    pub by_month: Vec<LabelCount>,
}

// ============================================================================
// Ban Responses
// ============================================================================

/// A ban record as stored, plus the display name with annotations stripped
#[derive(Debug, Serialize)]
pub struct BanResponse {
    pub id: i64,
    pub date: String,
    pub player_name: String,
    pub player_display_name: String,
    pub player_steam_id: String,
    pub admin_name: String,
    pub admin_steam_id: String,
    pub length: String,
    pub evidence: Vec<EvidenceEntry>,
    pub reason: String,
}

impl From<Ban> for BanResponse {
    fn from(ban: Ban) -> Self {
        let player_display_name = ban.player_display_name().to_string();
        Self {
            id: ban.id,
            date: ban.date,
            player_name: ban.player_name,
            player_display_name,
            player_steam_id: ban.player_steam_id,
            admin_name: ban.admin_name,
            admin_steam_id: ban.admin_steam_id,
            length: ban.length,
            evidence: classify_evidence(&ban.evidence),
            reason: ban.reason,
        }
    }
}

/// Outcome of a scrape trigger
#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    /// False when another scrape was already running; nothing was queued.
    pub started: bool,
    /// Rows inserted by this run (0 when not started).
    pub imported: u64,
}

// ============================================================================
// Settings Responses
// ============================================================================

/// Current application settings
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub evidence_dir: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness response with per-dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

/// Individual dependency checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
}
