//! Outfit entity - a named combination of wardrobe items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Snapshot of a wardrobe item taken when the outfit was saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitItem {
    pub wardrobe_item_id: Snowflake,
    pub item_name: String,
    pub item_image_url: Option<String>,
    pub item_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outfit {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub name: String,
    pub items: Vec<OutfitItem>,
    pub occasion: Option<String>,
    pub weather: Option<String>,
    pub notes: Option<String>,
    pub is_favorite: bool,
    pub worn_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Outfit {
    pub fn new(id: Snowflake, user_id: Snowflake, name: String, items: Vec<OutfitItem>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            name,
            items,
            occasion: None,
            weather: None,
            notes: None,
            is_favorite: false,
            worn_date: now,
            created_at: now,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    pub fn wardrobe_item_ids(&self) -> impl Iterator<Item = Snowflake> + '_ {
        self.items.iter().map(|item| item.wardrobe_item_id)
    }
}
