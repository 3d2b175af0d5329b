//! Report service
//!
//! Handles report creation, editing, deletion, search, and listing.

use chrono::{NaiveDate, NaiveDateTime};
use garnet_core::traits::{ReportQuery, SearchFilter, SortField, SortOrder, YearMonth};
use garnet_core::{NewReport, ReportReason};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateReportRequest, ListReportsParams, ReportResponse, UpdateReportRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Accepted input shapes for report timestamps (HTML `datetime-local`).
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List reports matching the given search and sort parameters
    #[instrument(skip(self))]
    pub async fn list_reports(
        &self,
        params: ListReportsParams,
    ) -> ServiceResult<Vec<ReportResponse>> {
        let query = build_query(&params)?;
        let reports = self.ctx.report_repo().find(&query).await?;

        let now = chrono::Local::now().naive_local();
        Ok(reports
            .into_iter()
            .map(|r| ReportResponse::from_report(r, now))
            .collect())
    }

    /// Get report by ID
    #[instrument(skip(self))]
    pub async fn get_report(&self, id: i64) -> ServiceResult<ReportResponse> {
        let report = self
            .ctx
            .report_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Report", id.to_string()))?;

        let now = chrono::Local::now().naive_local();
        Ok(ReportResponse::from_report(report, now))
    }

    /// Create a new report
    #[instrument(skip(self, request))]
    pub async fn create_report(
        &self,
        request: CreateReportRequest,
    ) -> ServiceResult<ReportResponse> {
        request.validate()?;
        let date_time = parse_date_time(&request.date_time)?;
        let report_reason = encode_reason(&request.report_reason)?;

        let new_report = NewReport {
            date_time,
            reporter: request.reporter,
            reportee: request.reportee,
            report_reason,
            evidence: request.evidence,
            punishment: request.punishment,
        };

        let report = self.ctx.report_repo().create(&new_report).await?;
        info!(report_id = report.id, "Report created");

        let now = chrono::Local::now().naive_local();
        Ok(ReportResponse::from_report(report, now))
    }

    /// Replace all editable fields of an existing report
    #[instrument(skip(self, request))]
    pub async fn update_report(
        &self,
        id: i64,
        request: UpdateReportRequest,
    ) -> ServiceResult<ReportResponse> {
        request.validate()?;
        let date_time = parse_date_time(&request.date_time)?;
        let report_reason = encode_reason(&request.report_reason)?;

        let mut report = self
            .ctx
            .report_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Report", id.to_string()))?;

        report.date_time = date_time;
        report.reporter = request.reporter;
        report.reportee = request.reportee;
        report.report_reason = report_reason;
        report.evidence = request.evidence;
        report.punishment = request.punishment;

        self.ctx.report_repo().update(&report).await?;
        info!(report_id = id, "Report updated");

        let now = chrono::Local::now().naive_local();
        Ok(ReportResponse::from_report(report, now))
    }

    /// Delete a report
    #[instrument(skip(self))]
    pub async fn delete_report(&self, id: i64) -> ServiceResult<()> {
        self.ctx.report_repo().delete(id).await?;
        info!(report_id = id, "Report deleted");
        Ok(())
    }
}

/// Encode a structured reason into its stored comma-joined form.
///
/// The reason is the only free-form field without a validator length rule,
/// so the bounds are enforced here on the encoded form.
fn encode_reason(reason: &ReportReason) -> ServiceResult<String> {
    let field = reason.to_field();
    if field.is_empty() {
        return Err(ServiceError::validation(
            "report_reason needs at least one tag or custom text",
        ));
    }
    if field.len() > 500 {
        return Err(ServiceError::validation(
            "report_reason must encode to at most 500 characters",
        ));
    }
    Ok(field)
}

/// Parse a report timestamp, accepting minute and second precision.
pub(crate) fn parse_date_time(raw: &str) -> ServiceResult<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| {
            ServiceError::validation(format!(
                "date_time must use the YYYY-MM-DDTHH:MM format, got '{raw}'"
            ))
        })
}

/// Convert raw query-string parameters into a typed report query.
///
/// Malformed `date`/`month` values under their dedicated fields are
/// rejected; under `all` they simply don't contribute the date/month arm.
fn build_query(params: &ListReportsParams) -> ServiceResult<ReportQuery> {
    let raw_query = params
        .search_query
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();

    let filter = if raw_query.is_empty() {
        None
    } else {
        let field = params.search_field.as_deref().unwrap_or("all");
        Some(match field {
            "all" => SearchFilter::All {
                query: raw_query.to_string(),
                as_date: parse_date(raw_query),
                as_month: parse_month(raw_query),
            },
            "reporter" => SearchFilter::Reporter(raw_query.to_string()),
            "reportee" => SearchFilter::Reportee(raw_query.to_string()),
            "punishment" => SearchFilter::Punishment(raw_query.to_string()),
            "date" => SearchFilter::Date(parse_date(raw_query).ok_or_else(|| {
                ServiceError::validation("date filters use the YYYY-MM-DD format")
            })?),
            "month" => SearchFilter::Month(parse_month(raw_query).ok_or_else(|| {
                ServiceError::validation("month filters use the YYYY-MM format")
            })?),
            other => {
                return Err(ServiceError::validation(format!(
                    "unknown search_field '{other}'"
                )))
            }
        })
    };

    let sort_by = match params.sort_by.as_deref() {
        None | Some("date_time") => SortField::DateTime,
        Some("reporter") => SortField::Reporter,
        Some("reportee") => SortField::Reportee,
        Some("report_reason") => SortField::ReportReason,
        Some("punishment") => SortField::Punishment,
        Some("month") => SortField::Month,
        Some(other) => {
            return Err(ServiceError::validation(format!(
                "unknown sort_by '{other}'"
            )))
        }
    };

    let sort_order = match params.sort_order.as_deref() {
        None | Some("desc") => SortOrder::Desc,
        Some("asc") => SortOrder::Asc,
        Some(other) => {
            return Err(ServiceError::validation(format!(
                "unknown sort_order '{other}'"
            )))
        }
    };

    Ok(ReportQuery {
        filter,
        sort_by,
        sort_order,
    })
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn parse_month(raw: &str) -> Option<YearMonth> {
    let (year, month) = raw.split_once('-')?;
    if year.len() != 4 {
        return None;
    }
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some(YearMonth { year, month })
}
