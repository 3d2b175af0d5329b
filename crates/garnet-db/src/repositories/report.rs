//! SQLite implementation of ReportRepository

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::instrument;

use garnet_core::traits::{
    LabelCount, ReportQuery, ReportRepository, RepoResult, SearchFilter, SortField, SortOrder,
};
use garnet_core::{NewReport, Report};

use crate::models::ReportModel;

use super::error::{map_db_error, report_not_found};

const SELECT_COLUMNS: &str =
    "SELECT id, date_time, reporter, reportee, report_reason, evidence, punishment FROM reports";

/// SQLite implementation of ReportRepository
#[derive(Clone)]
pub struct SqliteReportRepository {
    pool: SqlitePool,
}

impl SqliteReportRepository {
    /// Create a new SqliteReportRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// SQL expression for a sort field. Static strings only; caller input never
/// reaches the ORDER BY clause directly.
fn sort_expr(field: SortField) -> &'static str {
    match field {
        SortField::DateTime => "date_time",
        SortField::Reporter => "reporter",
        SortField::Reportee => "reportee",
        SortField::ReportReason => "report_reason",
        SortField::Punishment => "punishment",
        SortField::Month => "strftime('%Y-%m', date_time)",
    }
}

fn order_expr(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &SearchFilter) {
    match filter {
        SearchFilter::All {
            query,
            as_date,
            as_month,
        } => {
            let like = format!("%{query}%");
            qb.push(" AND (reporter LIKE ");
            qb.push_bind(like.clone());
            qb.push(" OR reportee LIKE ");
            qb.push_bind(like.clone());
            qb.push(" OR report_reason LIKE ");
            qb.push_bind(like.clone());
            qb.push(" OR punishment LIKE ");
            qb.push_bind(like);
            if let Some(date) = as_date {
                qb.push(" OR date(date_time) = ");
                qb.push_bind(date.to_string());
            }
            if let Some(month) = as_month {
                qb.push(" OR strftime('%Y-%m', date_time) = ");
                qb.push_bind(month.to_string());
            }
            qb.push(")");
        }
        SearchFilter::Reporter(query) => {
            qb.push(" AND reporter LIKE ");
            qb.push_bind(format!("%{query}%"));
        }
        SearchFilter::Reportee(query) => {
            qb.push(" AND reportee LIKE ");
            qb.push_bind(format!("%{query}%"));
        }
        SearchFilter::Punishment(query) => {
            qb.push(" AND punishment LIKE ");
            qb.push_bind(format!("%{query}%"));
        }
        SearchFilter::Date(date) => {
            qb.push(" AND date(date_time) = ");
            qb.push_bind(date.to_string());
        }
        SearchFilter::Month(month) => {
            qb.push(" AND strftime('%Y-%m', date_time) = ");
            qb.push_bind(month.to_string());
        }
    }
}

#[async_trait]
impl ReportRepository for SqliteReportRepository {
    #[instrument(skip(self))]
    async fn find(&self, query: &ReportQuery) -> RepoResult<Vec<Report>> {
        let mut qb: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new(format!("{SELECT_COLUMNS} WHERE 1=1"));

        if let Some(filter) = &query.filter {
            push_filter(&mut qb, filter);
        }

        qb.push(" ORDER BY ");
        qb.push(sort_expr(query.sort_by));
        qb.push(" ");
        qb.push(order_expr(query.sort_order));

        let models = qb
            .build_query_as::<ReportModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(Report::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Report>> {
        let model = sqlx::query_as::<_, ReportModel>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(model.map(Report::from))
    }

    #[instrument(skip(self, report))]
    async fn create(&self, report: &NewReport) -> RepoResult<Report> {
        let result = sqlx::query(
            r"
            INSERT INTO reports (date_time, reporter, reportee, report_reason, evidence, punishment)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(report.date_time)
        .bind(&report.reporter)
        .bind(&report.reportee)
        .bind(&report.report_reason)
        .bind(&report.evidence)
        .bind(&report.punishment)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Report {
            id: result.last_insert_rowid(),
            date_time: report.date_time,
            reporter: report.reporter.clone(),
            reportee: report.reportee.clone(),
            report_reason: report.report_reason.clone(),
            evidence: report.evidence.clone(),
            punishment: report.punishment.clone(),
        })
    }

    #[instrument(skip(self, report))]
    async fn update(&self, report: &Report) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE reports
            SET date_time = ?, reporter = ?, reportee = ?, report_reason = ?, evidence = ?, punishment = ?
            WHERE id = ?
            ",
        )
        .bind(report.date_time)
        .bind(&report.reporter)
        .bind(&report.reportee)
        .bind(&report.report_reason)
        .bind(&report.evidence)
        .bind(&report.punishment)
        .bind(report.id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_not_found(report.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM reports WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_by_reporter(&self) -> RepoResult<Vec<LabelCount>> {
        self.grouped_counts("SELECT reporter, COUNT(*) FROM reports GROUP BY reporter")
            .await
    }

    #[instrument(skip(self))]
    async fn count_by_reportee(&self) -> RepoResult<Vec<LabelCount>> {
        self.grouped_counts("SELECT reportee, COUNT(*) FROM reports GROUP BY reportee")
            .await
    }

    #[instrument(skip(self))]
    async fn count_by_reason(&self) -> RepoResult<Vec<LabelCount>> {
        self.grouped_counts("SELECT report_reason, COUNT(*) FROM reports GROUP BY report_reason")
            .await
    }

    #[instrument(skip(self))]
    async fn count_by_month(&self) -> RepoResult<Vec<LabelCount>> {
        self.grouped_counts(
            "SELECT strftime('%Y-%m', date_time) AS month, COUNT(*) FROM reports GROUP BY month",
        )
        .await
    }
}

impl SqliteReportRepository {
    async fn grouped_counts(&self, sql: &str) -> RepoResult<Vec<LabelCount>> {
        let rows = sqlx::query_as::<_, (String, i64)>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|(label, value)| LabelCount { label, value })
            .collect())
    }
}
