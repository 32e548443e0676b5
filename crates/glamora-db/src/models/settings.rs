//! System settings database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct SystemSettingsModel {
    pub community_guidelines: String,
    pub max_file_size_mb: i32,
    pub allowed_file_types: Vec<String>,
    pub auto_moderation_enabled: bool,
    pub report_threshold: i32,
    pub updated_by: Option<i64>,
    pub updated_at: DateTime<Utc>,
}
