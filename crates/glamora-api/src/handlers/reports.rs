//! Report handlers
//!
//! Users file reports; admins review them and may restrict the reported
//! account straight from a report.

use axum::{extract::State, Json};
use glamora_service::{
    ModerationService, ReportListQuery, ReportListResponse, ReportService,
    ReportUpdatedResponse, RestrictUserRequest, RestrictionResponse, SubmitReportRequest,
    UpdateReportRequest,
};

use crate::extractors::{
    ActiveUser, AdminUser, IdPath, OptionalValidatedJson, Pagination, QueryParams, ValidatedJson,
};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/admin/reports?page&limit&status
pub async fn list_reports(
    State(state): State<AppState>,
    _admin: AdminUser,
    Pagination(page): Pagination,
    QueryParams(query): QueryParams<ReportListQuery>,
) -> ApiResult<Json<ReportListResponse>> {
    let service = ReportService::new(state.service_context());
    Ok(Json(service.list(query, page).await?))
}

/// PUT /api/admin/reports/:id
pub async fn update_report(
    State(state): State<AppState>,
    admin: AdminUser,
    IdPath(report_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateReportRequest>,
) -> ApiResult<Json<ReportUpdatedResponse>> {
    let service = ReportService::new(state.service_context());
    Ok(Json(service.update(report_id, admin.id(), request).await?))
}

/// Restrict the reported user and resolve the report.
///
/// The body is optional so that a missing body reports the missing fields
/// rather than a parse failure.
///
/// PUT /api/admin/reports/:id/restrict
pub async fn restrict_user(
    State(state): State<AppState>,
    admin: AdminUser,
    IdPath(report_id): IdPath,
    OptionalValidatedJson(request): OptionalValidatedJson<RestrictUserRequest>,
) -> ApiResult<Json<RestrictionResponse>> {
    let service = ModerationService::new(state.service_context());
    Ok(Json(
        service
            .restrict_from_report(report_id, admin.id(), request)
            .await?,
    ))
}

/// POST /api/reports
pub async fn submit_report(
    State(state): State<AppState>,
    user: ActiveUser,
    ValidatedJson(request): ValidatedJson<SubmitReportRequest>,
) -> ApiResult<Created<ReportUpdatedResponse>> {
    let service = ReportService::new(state.service_context());
    Ok(Created(service.submit(user.id(), request).await?))
}
