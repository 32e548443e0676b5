//! Clothing usage aggregate row

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ItemUsageModel {
    pub wardrobe_item_id: i64,
    pub name: String,
    pub category: String,
    pub usage_count: i64,
}
