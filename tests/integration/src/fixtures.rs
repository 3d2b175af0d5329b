//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Structured report reason, for both requests and responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonBody {
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_text: Option<String>,
}

impl ReasonBody {
    pub fn tags(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            other_text: None,
        }
    }
}

/// Report creation payload
#[derive(Debug, Clone, Serialize)]
pub struct ReportPayload {
    pub date_time: String,
    pub reporter: String,
    pub reportee: String,
    pub report_reason: ReasonBody,
    pub evidence: String,
    pub punishment: String,
}

impl ReportPayload {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            date_time: "2024-03-15T18:45:00".to_string(),
            reporter: format!("Reporter{suffix}"),
            reportee: format!("Reportee{suffix}"),
            report_reason: ReasonBody::tags(&["RDM"]),
            evidence: String::new(),
            punishment: "3 day ban".to_string(),
        }
    }
}

/// Report as returned by the API
#[derive(Debug, Deserialize)]
pub struct ReportBody {
    pub id: i64,
    pub date_time: String,
    pub reporter: String,
    pub reportee: String,
    pub report_reason: ReasonBody,
    pub evidence: Vec<EvidenceEntryBody>,
    pub punishment: String,
    pub ban_status: String,
}

/// Classified evidence entry
#[derive(Debug, Deserialize)]
pub struct EvidenceEntryBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Ban creation payload
#[derive(Debug, Clone, Serialize)]
pub struct BanPayload {
    pub date: String,
    pub player_name: String,
    pub player_steam_id: String,
    pub admin_name: String,
    pub admin_steam_id: String,
    pub length: String,
    pub evidence: String,
    pub reason: String,
}

impl BanPayload {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            date: "01-15-2024 13:37".to_string(),
            player_name: format!("Player{suffix}"),
            player_steam_id: format!("STEAM_0:1:{suffix}"),
            admin_name: "AdminBob".to_string(),
            admin_steam_id: "STEAM_0:0:42".to_string(),
            length: "1 week".to_string(),
            evidence: String::new(),
            reason: "Mass RDM".to_string(),
        }
    }
}

/// Ban as returned by the API
#[derive(Debug, Deserialize)]
pub struct BanBody {
    pub id: i64,
    pub date: String,
    pub player_name: String,
    pub player_display_name: String,
    pub player_steam_id: String,
    pub admin_name: String,
    pub admin_steam_id: String,
    pub length: String,
    pub evidence: Vec<EvidenceEntryBody>,
    pub reason: String,
}

/// Scrape trigger response
#[derive(Debug, Deserialize)]
pub struct ScrapeBody {
    pub started: bool,
    pub imported: u64,
}

/// Label/count aggregate bucket
#[derive(Debug, Deserialize)]
pub struct LabelCountBody {
    pub label: String,
    pub value: i64,
}

/// Stats response
#[derive(Debug, Deserialize)]
pub struct StatsBody {
    pub total_reports: i64,
    pub by_reporter: Vec<LabelCountBody>,
    pub by_reportee: Vec<LabelCountBody>,
    pub by_reason: Vec<LabelCountBody>,
    pub by_month: Vec<LabelCountBody>,
}

/// Settings body for both requests and responses
#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsBody {
    pub evidence_dir: String,
}
