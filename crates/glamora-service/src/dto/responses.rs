//! Response DTOs for API endpoints
//!
//! Field names are camelCase and Snowflake ids serialize as strings.
//! Joined records reuse the original foreign-key field name and hold either
//! the bare id or the populated summary, see [`Populated`].

use chrono::{DateTime, Utc};
use glamora_core::{
    AccountStatus, ItemStatus, OutfitItem, ReportStatus, RestrictionDuration, Snowflake, UserRole,
};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Page-number pagination metadata, flattened next to the page items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_pages: i64,
    pub current_page: i64,
    pub total: i64,
}

impl PageMeta {
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        let limit = limit.max(1);
        Self {
            total_pages: (total + limit - 1) / limit,
            current_page: page,
            total,
        }
    }
}

/// A reference that is either just an id or the joined record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Populated<T> {
    Id(Snowflake),
    Record(T),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummaryResponse {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummaryResponse {
    pub id: Snowflake,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============================================================================
// Auth Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AuthUserResponse {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    pub user: AuthUserResponse,
}

// ============================================================================
// User Responses
// ============================================================================

/// A user as admins and the account owner see it. Never carries the hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    /// `active` or `inactive`, the field the dashboard tables render
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub account_status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    #[serde(flatten)]
    pub page: PageMeta,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub wardrobe_items: i64,
    pub marketplace_items: i64,
    pub reports_received: i64,
    pub reports_submitted: i64,
}

#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub user: UserResponse,
    pub stats: UserStats,
}

#[derive(Debug, Serialize)]
pub struct UserUpdatedResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

// ============================================================================
// Report Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub id: Snowflake,
    pub reporter_id: Populated<UserSummaryResponse>,
    pub reported_user_id: Populated<UserSummaryResponse>,
    pub marketplace_item_id: Option<Populated<ItemSummaryResponse>>,
    pub reason: String,
    pub description: Option<String>,
    pub status: ReportStatus,
    pub admin_notes: Option<String>,
    pub resolved_by: Option<Snowflake>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReportListResponse {
    pub reports: Vec<ReportResponse>,
    #[serde(flatten)]
    pub page: PageMeta,
}

#[derive(Debug, Serialize)]
pub struct ReportUpdatedResponse {
    pub message: String,
    pub report: ReportResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionResponse {
    pub message: String,
    pub restriction_end_date: DateTime<Utc>,
    pub restriction_duration: RestrictionDuration,
}

// ============================================================================
// Marketplace Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceItemResponse {
    pub id: Snowflake,
    pub user_id: Populated<UserSummaryResponse>,
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

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<MarketplaceItemResponse>,
}

#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    pub items: Vec<MarketplaceItemResponse>,
    #[serde(flatten)]
    pub page: PageMeta,
}

#[derive(Debug, Serialize)]
pub struct ItemActionResponse {
    pub message: String,
    pub item: MarketplaceItemResponse,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub total_users: i64,
    pub active_users: i64,
    pub total_reports: i64,
    pub active_listings: i64,
    pub pending_posts: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyCountResponse {
    pub year: i32,
    pub month: u32,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCountResponse {
    pub category: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub user_registrations: Vec<MonthlyCountResponse>,
    pub marketplace_activity: Vec<MonthlyCountResponse>,
    pub reports_over_time: Vec<MonthlyCountResponse>,
    pub top_categories: Vec<CategoryCountResponse>,
    pub period: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDto {
    pub community_guidelines: String,
    /// Display form, e.g. `10MB`
    pub max_file_size: String,
    pub max_file_size_mb: i32,
    pub allowed_file_types: Vec<String>,
    pub auto_moderation_enabled: bool,
    pub report_threshold: i32,
    pub updated_by: Option<Snowflake>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub settings: SettingsDto,
}

#[derive(Debug, Serialize)]
pub struct SettingsUpdatedResponse {
    pub message: String,
    pub settings: SettingsDto,
}

// ============================================================================
// Wardrobe, Outfit and Usage Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeItemResponse {
    pub id: Snowflake,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct WardrobeItemsResponse {
    pub items: Vec<WardrobeItemResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitResponse {
    pub id: Snowflake,
    pub outfit_name: String,
    pub outfit_items: Vec<OutfitItem>,
    pub occasion: Option<String>,
    pub weather: Option<String>,
    pub notes: Option<String>,
    pub is_favorite: bool,
    pub worn_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct OutfitEnvelope {
    pub message: String,
    pub outfit: OutfitResponse,
}

#[derive(Debug, Serialize)]
pub struct OutfitsResponse {
    pub outfits: Vec<OutfitResponse>,
}

#[derive(Debug, Serialize)]
pub struct TrackUsageResponse {
    pub message: String,
    pub tracked: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageItemResponse {
    pub id: Snowflake,
    pub name: String,
    pub category: String,
    pub usage_count: i64,
    /// Highest usage count in the range, the denominator of the client's bars
    pub max_usage: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryUsageResponse {
    pub category: String,
    pub items: Vec<UsageItemResponse>,
}

#[derive(Debug, Serialize)]
pub struct FrequentUsageResponse {
    pub range: String,
    pub categories: Vec<CategoryUsageResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

fn health_label(healthy: bool) -> String {
    if healthy { "healthy" } else { "unhealthy" }.to_string()
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        Self {
            status: if database_healthy && redis_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: health_label(database_healthy),
                redis: health_label(redis_healthy),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
