//! Marketplace listing entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Pending,
    Active,
    Rejected,
    Sold,
}

impl ItemStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Rejected => "rejected",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "rejected" => Ok(Self::Rejected),
            "sold" => Ok(Self::Sold),
            other => Err(DomainError::InvalidItemStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketplaceItem {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub status: ItemStatus,
    pub approved_by: Option<Snowflake>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub rejected_by: Option<Snowflake>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MarketplaceItem {
    /// New listings wait in the moderation queue
    pub fn new(id: Snowflake, user_id: Snowflake, name: String, category: String, price: f64) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            name,
            description: None,
            category,
            price,
            image_url: None,
            status: ItemStatus::Pending,
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
            rejected_by: None,
            rejected_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn approve(&mut self, admin_id: Snowflake, now: DateTime<Utc>) {
        self.status = ItemStatus::Active;
        self.approved_by = Some(admin_id);
        self.approved_at = Some(now);
        self.updated_at = now;
    }

    pub fn reject(&mut self, admin_id: Snowflake, reason: Option<String>, now: DateTime<Utc>) {
        self.status = ItemStatus::Rejected;
        self.rejected_by = Some(admin_id);
        self.rejected_at = Some(now);
        self.rejection_reason = reason;
        self.updated_at = now;
    }
}
