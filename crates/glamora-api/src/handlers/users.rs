//! Profile handlers for the signed-in user

use axum::{extract::State, Json};
use glamora_service::{ProfileResponse, UpdateProfileRequest, UserService, UserUpdatedResponse};

use crate::extractors::{ActiveUser, AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.get_me(auth.user_id).await?))
}

/// PUT /api/users/me
pub async fn update_current_user(
    State(state): State<AppState>,
    user: ActiveUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserUpdatedResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.update_me(user.id(), request).await?))
}
