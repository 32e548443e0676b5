//! Wardrobe item entity - a piece of clothing a user owns

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardrobeItem {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WardrobeItem {
    pub fn new(id: Snowflake, user_id: Snowflake, name: String, category: String) -> Self {
        Self {
            id,
            user_id,
            name,
            category,
            subcategory: None,
            color: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }
}
