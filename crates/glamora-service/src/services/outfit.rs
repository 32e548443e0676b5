//! Saved outfits
//!
//! Outfit items are snapshots of the caller's wardrobe rows taken when the
//! outfit is saved. Another user's outfit behaves as if it did not exist.

use std::collections::HashMap;

use chrono::Utc;
use glamora_core::{DomainError, Outfit, OutfitItem, Snowflake, WardrobeItem};
use tracing::{info, instrument};

use crate::dto::{
    CreateOutfitRequest, MessageResponse, OutfitEnvelope, OutfitItemRequest, OutfitResponse,
    OutfitsResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Keep the requested order; every id must be among `owned`
fn snapshot_items(
    requested: &[OutfitItemRequest],
    owned: Vec<WardrobeItem>,
) -> Result<Vec<OutfitItem>, DomainError> {
    let owned: HashMap<Snowflake, WardrobeItem> =
        owned.into_iter().map(|item| (item.id, item)).collect();

    requested
        .iter()
        .map(|req| {
            owned
                .get(&req.wardrobe_item_id)
                .map(|item| OutfitItem {
                    wardrobe_item_id: item.id,
                    item_name: item.name.clone(),
                    item_image_url: item.image_url.clone(),
                    item_category: item.category.clone(),
                })
                .ok_or(DomainError::WardrobeItemNotFound(req.wardrobe_item_id))
        })
        .collect()
}

pub struct OutfitService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OutfitService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(items = request.outfit_items.len()))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        request: CreateOutfitRequest,
    ) -> ServiceResult<OutfitEnvelope> {
        let mut ids: Vec<Snowflake> = request.outfit_items.iter().map(|i| i.wardrobe_item_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let owned = self.ctx.wardrobe_repo().find_owned(user_id, &ids).await?;
        let items = snapshot_items(&request.outfit_items, owned)?;

        let mut outfit = Outfit::new(self.ctx.generate_id(), user_id, request.outfit_name, items);
        outfit.occasion = request.occasion;
        outfit.weather = request.weather;
        outfit.notes = request.notes;
        outfit.worn_date = request.worn_date.unwrap_or_else(Utc::now);

        self.ctx.outfit_repo().create(&outfit).await?;
        info!(outfit_id = %outfit.id, user_id = %user_id, "Outfit saved");

        Ok(OutfitEnvelope {
            message: "Outfit saved successfully".to_string(),
            outfit: OutfitResponse::from(outfit),
        })
    }

    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Snowflake) -> ServiceResult<OutfitsResponse> {
        let outfits = self.ctx.outfit_repo().find_by_user(user_id).await?;
        Ok(OutfitsResponse {
            outfits: outfits.into_iter().map(OutfitResponse::from).collect(),
        })
    }

    #[instrument(skip(self))]
    pub async fn set_favorite(
        &self,
        user_id: Snowflake,
        outfit_id: Snowflake,
        is_favorite: bool,
    ) -> ServiceResult<OutfitEnvelope> {
        let mut outfit = self.find_owned(user_id, outfit_id).await?;
        self.ctx.outfit_repo().set_favorite(outfit_id, is_favorite).await?;
        outfit.is_favorite = is_favorite;

        Ok(OutfitEnvelope {
            message: "Outfit updated successfully".to_string(),
            outfit: OutfitResponse::from(outfit),
        })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake, outfit_id: Snowflake) -> ServiceResult<MessageResponse> {
        self.find_owned(user_id, outfit_id).await?;
        self.ctx.outfit_repo().delete(outfit_id).await?;

        info!(outfit_id = %outfit_id, user_id = %user_id, "Outfit deleted");
        Ok(MessageResponse::new("Outfit deleted successfully"))
    }

    /// Load an outfit the caller owns; anything else is "not found"
    pub(crate) async fn find_owned(&self, user_id: Snowflake, outfit_id: Snowflake) -> ServiceResult<Outfit> {
        let outfit = self
            .ctx
            .outfit_repo()
            .find_by_id(outfit_id)
            .await?
            .filter(|outfit| outfit.is_owned_by(user_id))
            .ok_or(DomainError::OutfitNotFound(outfit_id))?;
        Ok(outfit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wardrobe_item(id: i64, name: &str) -> WardrobeItem {
        WardrobeItem::new(Snowflake::new(id), Snowflake::new(1), name.to_string(), "Tops".to_string())
    }

    fn request(id: i64) -> OutfitItemRequest {
        OutfitItemRequest {
            wardrobe_item_id: Snowflake::new(id),
        }
    }

    #[test]
    fn test_snapshot_keeps_request_order() {
        let owned = vec![wardrobe_item(2, "Shirt"), wardrobe_item(3, "Cardigan")];
        let items = snapshot_items(&[request(3), request(2)], owned).unwrap();

        assert_eq!(items[0].item_name, "Cardigan");
        assert_eq!(items[1].wardrobe_item_id, Snowflake::new(2));
        assert_eq!(items[1].item_category, "Tops");
    }

    #[test]
    fn test_snapshot_rejects_foreign_items() {
        let err = snapshot_items(&[request(2), request(9)], vec![wardrobe_item(2, "Shirt")]).unwrap_err();
        assert!(matches!(err, DomainError::WardrobeItemNotFound(id) if id == Snowflake::new(9)));
    }
}
