//! Report entity - a player-submitted complaint

use chrono::NaiveDateTime;

/// A persisted report.
///
/// Reports are created, edited, and deleted via direct user action; they are
/// never produced by scraping. `ban_status` and classified evidence are
/// derived from `punishment`/`evidence` at read time and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    pub date_time: NaiveDateTime,
    pub reporter: String,
    pub reportee: String,
    /// Comma-joined tag list; see [`crate::value_objects::ReportReason`].
    pub report_reason: String,
    /// Comma-separated list of URLs/paths, may be empty.
    pub evidence: String,
    /// Free-text punishment label, may encode a ban duration.
    pub punishment: String,
}

/// A report that has not been persisted yet (no id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub date_time: NaiveDateTime,
    pub reporter: String,
    pub reportee: String,
    pub report_reason: String,
    pub evidence: String,
    pub punishment: String,
}
