//! Report database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub id: i64,
    pub reporter_id: i64,
    pub reported_user_id: i64,
    pub marketplace_item_id: Option<i64>,
    pub reason: String,
    pub description: Option<String>,
    pub status: String,
    pub admin_notes: Option<String>,
    pub resolved_by: Option<i64>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Report joined with reporter, reported user and listing
#[derive(Debug, Clone, FromRow)]
pub struct ReportDetailsModel {
    #[sqlx(flatten)]
    pub report: ReportModel,
    pub reporter_name: Option<String>,
    pub reporter_email: Option<String>,
    pub reported_name: Option<String>,
    pub reported_email: Option<String>,
    pub item_name: Option<String>,
    pub item_description: Option<String>,
}
