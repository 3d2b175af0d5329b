//! Statistics service
//!
//! Aggregate report counts. The grouping happens in SQL; this layer only
//! assembles the response.

use tracing::instrument;

use crate::dto::StatsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Gather report statistics
    #[instrument(skip(self))]
    pub async fn report_stats(&self) -> ServiceResult<StatsResponse> {
        let repo = self.ctx.report_repo();

        let total_reports = repo.count().await?;
        let by_reporter = repo.count_by_reporter().await?;
        let by_reportee = repo.count_by_reportee().await?;
        let by_reason = repo.count_by_reason().await?;
        let by_month = repo.count_by_month().await?;

        Ok(StatsResponse {
            total_reports,
            by_reporter,
            by_reportee,
            by_reason,
            by_month,
        })
    }
}
