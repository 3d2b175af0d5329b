//! Legacy CSV report importer
//!
//! One-shot startup migration: when the reports table is empty and a legacy
//! export file exists, load it. Columns are date/time, reporter, reportee,
//! reason, evidence, punishment, with timestamps in the legacy
//! `MM/DD/YYYY HH:MM AM` shape. Rows that fail to parse are logged and
//! skipped rather than aborting the import.

use chrono::NaiveDateTime;
use garnet_core::NewReport;
use std::mem::take;
use tracing::{debug, info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Timestamp shape used by the legacy export.
const LEGACY_DATE_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Import service
pub struct ImportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImportService<'a> {
    /// Create a new ImportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Import the legacy CSV if the reports table is empty.
    ///
    /// Returns the number of reports imported (0 when skipped).
    #[instrument(skip(self))]
    pub async fn import_legacy_reports(&self) -> ServiceResult<u64> {
        if self.ctx.report_repo().count().await? > 0 {
            debug!("Reports table not empty, skipping legacy import");
            return Ok(0);
        }

        let path = &self.ctx.storage().import_csv;
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!(path, "No legacy CSV found, skipping import");
                return Ok(0);
            }
        };

        let mut imported = 0u64;
        for (line_no, row) in parse_rows(&raw).into_iter().enumerate() {
            if line_no == 0 && is_header(&row) {
                continue;
            }
            match row_to_report(&row) {
                Some(report) => {
                    self.ctx.report_repo().create(&report).await?;
                    imported += 1;
                }
                None => {
                    warn!(path, line = line_no + 1, "Skipping malformed CSV row");
                }
            }
        }

        info!(path, imported, "Legacy report import finished");
        Ok(imported)
    }
}

fn is_header(row: &[String]) -> bool {
    row.first()
        .is_some_and(|cell| cell.eq_ignore_ascii_case("date/time") || cell.eq_ignore_ascii_case("date_time"))
}

fn row_to_report(row: &[String]) -> Option<NewReport> {
    if row.len() < 6 {
        return None;
    }
    let date_time = NaiveDateTime::parse_from_str(row[0].trim(), LEGACY_DATE_FORMAT).ok()?;
    Some(NewReport {
        date_time,
        reporter: row[1].trim().to_string(),
        reportee: row[2].trim().to_string(),
        report_reason: row[3].trim().to_string(),
        evidence: row[4].trim().to_string(),
        punishment: row[5].trim().to_string(),
    })
}

/// Minimal CSV parser (quotes + CRLF tolerant).
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
