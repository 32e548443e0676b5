//! Admin dashboard handlers
//!
//! Metrics, analytics and platform settings.

use axum::{extract::State, Json};
use glamora_service::{
    AnalyticsQuery, AnalyticsResponse, AnalyticsService, MetricsResponse, SettingsResponse,
    SettingsService, SettingsUpdatedResponse, UpdateSettingsRequest,
};

use crate::extractors::{AdminUser, QueryParams, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/admin/metrics
pub async fn metrics(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<MetricsResponse>> {
    let service = AnalyticsService::new(state.service_context());
    Ok(Json(service.metrics().await?))
}

/// GET /api/admin/analytics?period=1month|3months|6months|1year
pub async fn analytics(
    State(state): State<AppState>,
    _admin: AdminUser,
    QueryParams(query): QueryParams<AnalyticsQuery>,
) -> ApiResult<Json<AnalyticsResponse>> {
    let service = AnalyticsService::new(state.service_context());
    Ok(Json(service.analytics(query).await?))
}

/// GET /api/admin/settings
pub async fn get_settings(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<SettingsResponse>> {
    let service = SettingsService::new(state.service_context());
    Ok(Json(service.get().await?))
}

/// PUT /api/admin/settings
pub async fn update_settings(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(request): ValidatedJson<UpdateSettingsRequest>,
) -> ApiResult<Json<SettingsUpdatedResponse>> {
    let service = SettingsService::new(state.service_context());
    Ok(Json(service.update(admin.id(), request).await?))
}
