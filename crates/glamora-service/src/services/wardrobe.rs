//! The caller's own wardrobe

use glamora_core::{Snowflake, WardrobeItem};
use tracing::{info, instrument};

use crate::dto::{CreateWardrobeItemRequest, WardrobeItemResponse, WardrobeItemsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct WardrobeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WardrobeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_item(
        &self,
        user_id: Snowflake,
        request: CreateWardrobeItemRequest,
    ) -> ServiceResult<WardrobeItemResponse> {
        let mut item = WardrobeItem::new(self.ctx.generate_id(), user_id, request.name, request.category);
        item.subcategory = request.subcategory;
        item.color = request.color;
        item.image_url = request.image_url;

        self.ctx.wardrobe_repo().create(&item).await?;
        info!(item_id = %item.id, user_id = %user_id, "Wardrobe item added");

        Ok(WardrobeItemResponse::from(item))
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self, user_id: Snowflake) -> ServiceResult<WardrobeItemsResponse> {
        let items = self.ctx.wardrobe_repo().find_by_user(user_id).await?;
        Ok(WardrobeItemsResponse {
            items: items.into_iter().map(WardrobeItemResponse::from).collect(),
        })
    }
}
