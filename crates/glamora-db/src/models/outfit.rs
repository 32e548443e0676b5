//! Outfit database model

use chrono::{DateTime, Utc};
use glamora_core::OutfitItem;
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct OutfitModel {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    /// Item snapshots stored as JSONB
    pub items: Json<Vec<OutfitItem>>,
    pub occasion: Option<String>,
    pub weather: Option<String>,
    pub notes: Option<String>,
    pub is_favorite: bool,
    pub worn_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
