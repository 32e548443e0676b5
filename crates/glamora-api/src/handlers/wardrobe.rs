//! Wardrobe handlers

use axum::{extract::State, Json};
use glamora_service::{
    CreateWardrobeItemRequest, WardrobeItemResponse, WardrobeItemsResponse, WardrobeService,
};

use crate::extractors::{ActiveUser, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/wardrobe/items
pub async fn list_items(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<WardrobeItemsResponse>> {
    let service = WardrobeService::new(state.service_context());
    Ok(Json(service.list_items(auth.user_id).await?))
}

/// POST /api/wardrobe/items
pub async fn create_item(
    State(state): State<AppState>,
    user: ActiveUser,
    ValidatedJson(request): ValidatedJson<CreateWardrobeItemRequest>,
) -> ApiResult<Created<WardrobeItemResponse>> {
    let service = WardrobeService::new(state.service_context());
    Ok(Created(service.create_item(user.id(), request).await?))
}
