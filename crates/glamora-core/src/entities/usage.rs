//! Clothing usage record - one wear of one wardrobe item

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub wardrobe_item_id: Snowflake,
    pub outfit_id: Snowflake,
    pub worn_at: DateTime<Utc>,
}
