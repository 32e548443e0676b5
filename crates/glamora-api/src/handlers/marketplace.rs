//! Marketplace handlers
//!
//! The admin moderation queue and the owner-side listing endpoints.

use axum::{extract::State, Json};
use glamora_service::{
    CategoriesResponse, CreateListingRequest, ItemActionResponse, ItemListQuery,
    ItemListResponse, ItemsResponse, MarketplaceService, RejectItemRequest,
};

use crate::extractors::{
    ActiveUser, AdminUser, AuthUser, IdPath, OptionalValidatedJson, Pagination, QueryParams,
    ValidatedJson,
};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/admin/marketplace/pending
pub async fn list_pending(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<ItemsResponse>> {
    let service = MarketplaceService::new(state.service_context());
    Ok(Json(service.list_pending().await?))
}

/// PUT /api/admin/marketplace/:id/approve
pub async fn approve_item(
    State(state): State<AppState>,
    admin: AdminUser,
    IdPath(item_id): IdPath,
) -> ApiResult<Json<ItemActionResponse>> {
    let service = MarketplaceService::new(state.service_context());
    Ok(Json(service.approve(item_id, admin.id()).await?))
}

/// PUT /api/admin/marketplace/:id/reject
pub async fn reject_item(
    State(state): State<AppState>,
    admin: AdminUser,
    IdPath(item_id): IdPath,
    OptionalValidatedJson(request): OptionalValidatedJson<RejectItemRequest>,
) -> ApiResult<Json<ItemActionResponse>> {
    let service = MarketplaceService::new(state.service_context());
    Ok(Json(service.reject(item_id, admin.id(), request).await?))
}

/// GET /api/admin/marketplace/categories
pub async fn list_categories(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<CategoriesResponse>> {
    let service = MarketplaceService::new(state.service_context());
    Ok(Json(service.categories().await?))
}

/// GET /api/admin/marketplace/items?page&limit&status&category
pub async fn list_items(
    State(state): State<AppState>,
    _admin: AdminUser,
    Pagination(page): Pagination,
    QueryParams(query): QueryParams<ItemListQuery>,
) -> ApiResult<Json<ItemListResponse>> {
    let service = MarketplaceService::new(state.service_context());
    Ok(Json(service.list_items(query, page).await?))
}

/// GET /api/marketplace/items/mine
pub async fn my_listings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ItemsResponse>> {
    let service = MarketplaceService::new(state.service_context());
    Ok(Json(service.my_listings(auth.user_id).await?))
}

/// New listings start out pending
///
/// POST /api/marketplace/items
pub async fn create_listing(
    State(state): State<AppState>,
    user: ActiveUser,
    ValidatedJson(request): ValidatedJson<CreateListingRequest>,
) -> ApiResult<Created<ItemActionResponse>> {
    let service = MarketplaceService::new(state.service_context());
    Ok(Created(service.create_listing(user.id(), request).await?))
}
