//! Aggregate rows for the admin dashboard

use sqlx::FromRow;

#[derive(Debug, Clone, Copy, FromRow)]
pub struct MetricsModel {
    pub total_users: i64,
    pub active_users: i64,
    pub total_reports: i64,
    pub active_listings: i64,
    pub pending_posts: i64,
}

#[derive(Debug, Clone, Copy, FromRow)]
pub struct MonthlyCountModel {
    pub year: i32,
    pub month: i32,
    pub count: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct CategoryCountModel {
    pub category: String,
    pub count: i64,
}
