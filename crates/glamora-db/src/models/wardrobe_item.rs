//! Wardrobe item database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct WardrobeItemModel {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
