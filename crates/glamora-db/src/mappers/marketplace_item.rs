//! Marketplace item model -> entity mappers

use glamora_core::{DomainError, ListingWithOwner, MarketplaceItem, Snowflake};

use super::{corrupt_column, user_summary};
use crate::models::{ListingWithOwnerModel, MarketplaceItemModel};

impl TryFrom<MarketplaceItemModel> for MarketplaceItem {
    type Error = DomainError;

    fn try_from(model: MarketplaceItemModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse()
            .map_err(|_| corrupt_column("marketplace_items.status", &model.status))?;

        Ok(MarketplaceItem {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            name: model.name,
            description: model.description,
            category: model.category,
            price: model.price,
            image_url: model.image_url,
            status,
            approved_by: model.approved_by.map(Snowflake::new),
            approved_at: model.approved_at,
            rejection_reason: model.rejection_reason,
            rejected_by: model.rejected_by.map(Snowflake::new),
            rejected_at: model.rejected_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<ListingWithOwnerModel> for ListingWithOwner {
    type Error = DomainError;

    fn try_from(model: ListingWithOwnerModel) -> Result<Self, Self::Error> {
        let owner = user_summary(model.item.user_id, model.owner_name, model.owner_email);
        Ok(ListingWithOwner {
            item: MarketplaceItem::try_from(model.item)?,
            owner,
        })
    }
}
