//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer
//! provides the implementation. Filter and sort specifications are typed
//! enums so the storage layer never interpolates caller-supplied strings
//! into SQL.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::entities::{Ban, NewBan, NewReport, Report};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// A calendar year-month pair used for month filters and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A validated search filter for report queries.
///
/// Date and month variants carry parsed values; parsing (and the rejection
/// of malformed input) happens in the service layer before any query runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// Substring match across reporter, reportee, reason, and punishment.
    /// When the query also parses as a date or month, those are ORed in.
    All {
        query: String,
        as_date: Option<NaiveDate>,
        as_month: Option<YearMonth>,
    },
    Reporter(String),
    Reportee(String),
    Punishment(String),
    Date(NaiveDate),
    Month(YearMonth),
}

/// Sortable report columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    DateTime,
    Reporter,
    Reportee,
    ReportReason,
    Punishment,
    /// Orders by the `YYYY-MM` rendering of the timestamp.
    Month,
}

/// Sort direction. Reports default to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Full query specification for listing reports.
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub filter: Option<SearchFilter>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

/// One labeled aggregate bucket, e.g. a reporter and their report count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub value: i64,
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// List reports matching the query, sorted as specified.
    async fn find(&self, query: &ReportQuery) -> RepoResult<Vec<Report>>;

    /// Find report by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Report>>;

    /// Insert a new report, returning it with its assigned id
    async fn create(&self, report: &NewReport) -> RepoResult<Report>;

    /// Update an existing report
    async fn update(&self, report: &Report) -> RepoResult<()>;

    /// Delete a report by id
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Total number of reports
    async fn count(&self) -> RepoResult<i64>;

    /// Report counts grouped by reporter
    async fn count_by_reporter(&self) -> RepoResult<Vec<LabelCount>>;

    /// Report counts grouped by reportee
    async fn count_by_reportee(&self) -> RepoResult<Vec<LabelCount>>;

    /// Report counts grouped by reason
    async fn count_by_reason(&self) -> RepoResult<Vec<LabelCount>>;

    /// Report counts grouped by `YYYY-MM` month
    async fn count_by_month(&self) -> RepoResult<Vec<LabelCount>>;
}

#[async_trait]
pub trait BanRepository: Send + Sync {
    /// List all bans
    async fn find_all(&self) -> RepoResult<Vec<Ban>>;

    /// Find ban by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Ban>>;

    /// Insert one ban, returning it with its assigned id
    async fn create(&self, ban: &NewBan) -> RepoResult<Ban>;

    /// Insert a batch of bans in a single transaction.
    ///
    /// All-or-nothing: a failure mid-batch aborts the whole insert and no
    /// partial set is committed. Returns the number of rows inserted.
    async fn create_many(&self, bans: &[NewBan]) -> RepoResult<u64>;

    /// Delete a ban by id
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
