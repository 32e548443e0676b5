//! Marketplace listings and their moderation queue

use chrono::Utc;
use glamora_core::{DomainError, ItemQuery, ItemStatus, MarketplaceItem, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    parse_filter, CategoriesResponse, CreateListingRequest, ItemActionResponse, ItemListQuery,
    ItemListResponse, ItemsResponse, MarketplaceItemResponse, PageMeta, PageRequest,
    RejectItemRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct MarketplaceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MarketplaceService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every pending listing with its owner, newest first
    #[instrument(skip(self))]
    pub async fn list_pending(&self) -> ServiceResult<ItemsResponse> {
        let items = self.ctx.marketplace_repo().find_pending().await?;

        Ok(ItemsResponse {
            items: items.into_iter().map(MarketplaceItemResponse::from).collect(),
        })
    }

    #[instrument(skip(self))]
    pub async fn approve(
        &self,
        item_id: Snowflake,
        admin_id: Snowflake,
    ) -> ServiceResult<ItemActionResponse> {
        let mut item = self.find(item_id).await?;
        item.approve(admin_id, Utc::now());
        self.ctx.marketplace_repo().update_status(&item).await?;

        info!(item_id = %item_id, admin_id = %admin_id, "Listing approved");

        Ok(ItemActionResponse {
            message: "Item approved successfully".to_string(),
            item: MarketplaceItemResponse::from(item),
        })
    }

    #[instrument(skip(self, request))]
    pub async fn reject(
        &self,
        item_id: Snowflake,
        admin_id: Snowflake,
        request: RejectItemRequest,
    ) -> ServiceResult<ItemActionResponse> {
        let mut item = self.find(item_id).await?;
        let reason = request.reason.filter(|r| !r.trim().is_empty());
        item.reject(admin_id, reason, Utc::now());
        self.ctx.marketplace_repo().update_status(&item).await?;

        info!(item_id = %item_id, admin_id = %admin_id, "Listing rejected");

        Ok(ItemActionResponse {
            message: "Item rejected successfully".to_string(),
            item: MarketplaceItemResponse::from(item),
        })
    }

    #[instrument(skip(self))]
    pub async fn list_items(
        &self,
        query: ItemListQuery,
        page: PageRequest,
    ) -> ServiceResult<ItemListResponse> {
        let status = parse_filter::<ItemStatus>(query.status.as_deref())?;
        let category = query
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && c != "all");

        let (items, total) = self
            .ctx
            .marketplace_repo()
            .list(&ItemQuery {
                status,
                category,
                offset: page.offset(),
                limit: page.limit,
            })
            .await?;

        Ok(ItemListResponse {
            items: items.into_iter().map(MarketplaceItemResponse::from).collect(),
            page: PageMeta::new(total, page.page, page.limit),
        })
    }

    /// Distinct wardrobe categories and subcategories, for the filter menus
    #[instrument(skip(self))]
    pub async fn categories(&self) -> ServiceResult<CategoriesResponse> {
        let (categories, subcategories) = self.ctx.wardrobe_repo().distinct_categories().await?;
        Ok(CategoriesResponse {
            categories,
            subcategories,
        })
    }

    /// New listings wait in the moderation queue
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_listing(
        &self,
        user_id: Snowflake,
        request: CreateListingRequest,
    ) -> ServiceResult<ItemActionResponse> {
        let mut item = MarketplaceItem::new(
            self.ctx.generate_id(),
            user_id,
            request.name,
            request.category,
            request.price,
        );
        item.description = request.description;
        item.image_url = request.image_url;

        self.ctx.marketplace_repo().create(&item).await?;
        info!(item_id = %item.id, user_id = %user_id, "Listing submitted for review");

        Ok(ItemActionResponse {
            message: "Item submitted for review".to_string(),
            item: MarketplaceItemResponse::from(item),
        })
    }

    #[instrument(skip(self))]
    pub async fn my_listings(&self, user_id: Snowflake) -> ServiceResult<ItemsResponse> {
        let items = self.ctx.marketplace_repo().find_by_owner(user_id).await?;

        Ok(ItemsResponse {
            items: items.into_iter().map(MarketplaceItemResponse::from).collect(),
        })
    }

    async fn find(&self, item_id: Snowflake) -> ServiceResult<MarketplaceItem> {
        Ok(self
            .ctx
            .marketplace_repo()
            .find_by_id(item_id)
            .await?
            .ok_or(DomainError::ItemNotFound(item_id))?)
    }
}
