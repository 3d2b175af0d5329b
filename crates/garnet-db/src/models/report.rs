//! Report database model

use chrono::NaiveDateTime;
use garnet_core::Report;
use sqlx::FromRow;

/// Database model for the reports table
#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub id: i64,
    pub date_time: NaiveDateTime,
    pub reporter: String,
    pub reportee: String,
    pub report_reason: String,
    pub evidence: String,
    pub punishment: String,
}

impl From<ReportModel> for Report {
    fn from(model: ReportModel) -> Self {
        Report {
            id: model.id,
            date_time: model.date_time,
            reporter: model.reporter,
            reportee: model.reportee,
            report_reason: model.report_reason,
            evidence: model.evidence,
            punishment: model.punishment,
        }
    }
}
