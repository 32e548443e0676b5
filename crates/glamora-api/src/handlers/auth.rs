//! Authentication handlers
//!
//! Registration, login, token refresh and logout for regular users, plus
//! the admin login and refresh pair used by the dashboard.

use axum::{extract::State, Json};
use glamora_service::{
    AdminLoginRequest, AuthResponse, AuthService, LoginRequest, LogoutRequest, MessageResponse,
    RefreshTokenRequest, RegisterRequest,
};

use crate::extractors::{AuthUser, JsonBody, OptionalJson, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(response))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// POST /api/auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(request).await?;
    Ok(Json(response))
}

/// Ends one session when a refresh token is given, otherwise all of them
///
/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    OptionalJson(request): OptionalJson<LogoutRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    service.logout(auth.user_id, request).await?;
    Ok(Json(MessageResponse::new("Logged out successfully")))
}

/// Dashboard login against the configured admin credentials
///
/// POST /api/admin/login
pub async fn admin_login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AdminLoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.admin_login(request).await?;
    Ok(Json(response))
}

/// POST /api/admin/refresh
pub async fn admin_refresh(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.admin_refresh(request).await?;
    Ok(Json(response))
}
