//! Admin user management handlers

use axum::{extract::State, Json};
use glamora_service::{
    AdminUpdateUserRequest, AdminUserService, MessageResponse, ModerationService,
    UserDetailResponse, UserListQuery, UserListResponse, UserUpdatedResponse,
};

use crate::extractors::{AdminUser, IdPath, Pagination, QueryParams, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/admin/users?page&limit&search&role&status
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    Pagination(page): Pagination,
    QueryParams(query): QueryParams<UserListQuery>,
) -> ApiResult<Json<UserListResponse>> {
    let service = AdminUserService::new(state.service_context());
    Ok(Json(service.list(query, page).await?))
}

/// GET /api/admin/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<UserDetailResponse>> {
    let service = AdminUserService::new(state.service_context());
    Ok(Json(service.get(user_id).await?))
}

/// PUT /api/admin/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    admin: AdminUser,
    IdPath(user_id): IdPath,
    ValidatedJson(request): ValidatedJson<AdminUpdateUserRequest>,
) -> ApiResult<Json<UserUpdatedResponse>> {
    tracing::debug!(admin_id = %admin.id(), user_id = %user_id, "Admin user update");
    let service = AdminUserService::new(state.service_context());
    Ok(Json(service.update(user_id, request).await?))
}

/// Soft delete
///
/// DELETE /api/admin/users/:id
pub async fn deactivate_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = AdminUserService::new(state.service_context());
    Ok(Json(service.deactivate(user_id).await?))
}

/// DELETE /api/admin/users/:id/restriction
pub async fn lift_restriction(
    State(state): State<AppState>,
    admin: AdminUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = ModerationService::new(state.service_context());
    Ok(Json(service.lift_restriction(user_id, admin.id()).await?))
}
