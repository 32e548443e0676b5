//! Clothing usage handlers

use axum::{extract::State, Json};
use glamora_service::{
    FrequentUsageResponse, TrackUsageRequest, TrackUsageResponse, UsageRangeQuery, UsageService,
};

use crate::extractors::{ActiveUser, AuthUser, JsonBody, QueryParams};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Record one wear of every item in an outfit
///
/// POST /api/clothing-usage/track
pub async fn track_usage(
    State(state): State<AppState>,
    user: ActiveUser,
    JsonBody(request): JsonBody<TrackUsageRequest>,
) -> ApiResult<Created<TrackUsageResponse>> {
    let service = UsageService::new(state.service_context());
    Ok(Created(service.track(user.id(), request).await?))
}

/// GET /api/clothing-usage/frequent?range=week|month|year
pub async fn frequent_usage(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<UsageRangeQuery>,
) -> ApiResult<Json<FrequentUsageResponse>> {
    let service = UsageService::new(state.service_context());
    Ok(Json(service.frequent(auth.user_id, query).await?))
}
