//! Report review and submission

use chrono::Utc;
use glamora_core::{DomainError, Report, ReportQuery, ReportStatus, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    parse_filter, PageMeta, PageRequest, ReportListQuery, ReportListResponse, ReportResponse,
    ReportUpdatedResponse, SubmitReportRequest, UpdateReportRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Status values are matched exactly, padding included
fn parse_status(raw: &str) -> ServiceResult<ReportStatus> {
    Ok(raw.parse()?)
}

pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Newest first, with the people and listing involved filled in
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        query: ReportListQuery,
        page: PageRequest,
    ) -> ServiceResult<ReportListResponse> {
        let status = parse_filter::<ReportStatus>(query.status.as_deref())?;

        let (reports, total) = self
            .ctx
            .report_repo()
            .list(&ReportQuery {
                status,
                offset: page.offset(),
                limit: page.limit,
            })
            .await?;

        Ok(ReportListResponse {
            reports: reports.into_iter().map(ReportResponse::from).collect(),
            page: PageMeta::new(total, page.page, page.limit),
        })
    }

    /// Set a new status. Omitted notes keep the previous ones.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        report_id: Snowflake,
        admin_id: Snowflake,
        request: UpdateReportRequest,
    ) -> ServiceResult<ReportUpdatedResponse> {
        let status = parse_status(&request.status)?;

        let mut report = self
            .ctx
            .report_repo()
            .find_by_id(report_id)
            .await?
            .ok_or(DomainError::ReportNotFound(report_id))?;

        report.review(status, admin_id, request.admin_notes, Utc::now());
        self.ctx.report_repo().update(&report).await?;

        info!(report_id = %report_id, admin_id = %admin_id, status = %status, "Report reviewed");

        Ok(ReportUpdatedResponse {
            message: "Report updated successfully".to_string(),
            report: ReportResponse::from(report),
        })
    }

    /// File a report against another user, optionally about one listing
    #[instrument(skip(self, request), fields(reported_user_id = %request.reported_user_id))]
    pub async fn submit(
        &self,
        reporter_id: Snowflake,
        request: SubmitReportRequest,
    ) -> ServiceResult<ReportUpdatedResponse> {
        let mut report = Report::new(
            self.ctx.generate_id(),
            reporter_id,
            request.reported_user_id,
            request.reason,
        )?;
        report.description = request.description;

        if self
            .ctx
            .user_repo()
            .find_by_id(request.reported_user_id)
            .await?
            .is_none()
        {
            return Err(DomainError::UserNotFound(request.reported_user_id).into());
        }

        if let Some(item_id) = request.marketplace_item_id {
            if self.ctx.marketplace_repo().find_by_id(item_id).await?.is_none() {
                return Err(DomainError::ItemNotFound(item_id).into());
            }
            report.marketplace_item_id = Some(item_id);
        }

        self.ctx.report_repo().create(&report).await?;
        info!(report_id = %report.id, reporter_id = %reporter_id, "Report submitted");

        Ok(ReportUpdatedResponse {
            message: "Report submitted successfully".to_string(),
            report: ReportResponse::from(report),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_is_exact() {
        assert_eq!(parse_status("resolved").unwrap(), ReportStatus::Resolved);
        assert_eq!(parse_status("dismissed").unwrap(), ReportStatus::Dismissed);

        for raw in [" resolved ", "Resolved", "resolved\n", ""] {
            let err = parse_status(raw).unwrap_err();
            assert_eq!(err.status_code(), 400);
            assert_eq!(err.error_code(), "INVALID_REPORT_STATUS");
        }
    }
}
