//! Outfit handlers
//!
//! Every route is scoped to the caller; another user's outfit is a 404.

use axum::{extract::State, Json};
use glamora_service::{
    CreateOutfitRequest, MessageResponse, OutfitEnvelope, OutfitService, OutfitsResponse,
    SetFavoriteRequest,
};

use crate::extractors::{ActiveUser, AuthUser, IdPath, JsonBody, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Newest worn first
///
/// GET /api/outfits
pub async fn list_outfits(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<OutfitsResponse>> {
    let service = OutfitService::new(state.service_context());
    Ok(Json(service.list(auth.user_id).await?))
}

/// POST /api/outfits
pub async fn create_outfit(
    State(state): State<AppState>,
    user: ActiveUser,
    ValidatedJson(request): ValidatedJson<CreateOutfitRequest>,
) -> ApiResult<Created<OutfitEnvelope>> {
    let service = OutfitService::new(state.service_context());
    Ok(Created(service.create(user.id(), request).await?))
}

/// PUT /api/outfits/:id/favorite
pub async fn set_favorite(
    State(state): State<AppState>,
    user: ActiveUser,
    IdPath(outfit_id): IdPath,
    JsonBody(request): JsonBody<SetFavoriteRequest>,
) -> ApiResult<Json<OutfitEnvelope>> {
    let service = OutfitService::new(state.service_context());
    Ok(Json(
        service
            .set_favorite(user.id(), outfit_id, request.is_favorite)
            .await?,
    ))
}

/// DELETE /api/outfits/:id
pub async fn delete_outfit(
    State(state): State<AppState>,
    user: ActiveUser,
    IdPath(outfit_id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = OutfitService::new(state.service_context());
    Ok(Json(service.delete(user.id(), outfit_id).await?))
}
