//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `users` table, restriction columns included
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub profile_picture: Option<String>,
    pub is_restricted: bool,
    pub restriction_reason: Option<String>,
    pub restriction_start_date: Option<DateTime<Utc>>,
    pub restriction_end_date: Option<DateTime<Utc>>,
    pub restriction_duration: Option<String>,
    pub restricted_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
