//! Wardrobe, usage and settings mappers

use glamora_core::{ItemUsage, Snowflake, SystemSettings, WardrobeItem};

use crate::models::{ItemUsageModel, SystemSettingsModel, WardrobeItemModel};

impl From<WardrobeItemModel> for WardrobeItem {
    fn from(model: WardrobeItemModel) -> Self {
        WardrobeItem {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            name: model.name,
            category: model.category,
            subcategory: model.subcategory,
            color: model.color,
            image_url: model.image_url,
            created_at: model.created_at,
        }
    }
}

impl From<ItemUsageModel> for ItemUsage {
    fn from(model: ItemUsageModel) -> Self {
        ItemUsage {
            wardrobe_item_id: Snowflake::new(model.wardrobe_item_id),
            name: model.name,
            category: model.category,
            usage_count: model.usage_count,
        }
    }
}

impl From<SystemSettingsModel> for SystemSettings {
    fn from(model: SystemSettingsModel) -> Self {
        SystemSettings {
            community_guidelines: model.community_guidelines,
            max_file_size_mb: model.max_file_size_mb,
            allowed_file_types: model.allowed_file_types,
            auto_moderation_enabled: model.auto_moderation_enabled,
            report_threshold: model.report_threshold,
            updated_by: model.updated_by.map(Snowflake::new),
            updated_at: model.updated_at,
        }
    }
}
