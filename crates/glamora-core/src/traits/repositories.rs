//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    ItemStatus, MarketplaceItem, Outfit, Report, ReportStatus, SystemSettings, UsageRecord, User,
    UserRole, WardrobeItem,
};
use crate::error::DomainError;
use crate::value_objects::{Restriction, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Read models shared by several repositories
// ============================================================================

/// The `{id, name, email}` projection admins see next to reports and listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub id: Snowflake,
    pub name: String,
    pub description: Option<String>,
}

/// One bucket of a monthly time series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

// ============================================================================
// User Repository
// ============================================================================

/// Filters for the admin user listing
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Case-insensitive match on name or email
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
    pub offset: i64,
    pub limit: i64,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile, role and activity fields
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Overwrite the restriction columns from `user.account_status`
    async fn update_account_status(&self, user: &User) -> RepoResult<()>;

    /// Set `is_active = false`; the row is kept
    async fn deactivate(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Page of users matching the query plus the total match count
    async fn list(&self, query: &UserQuery) -> RepoResult<(Vec<User>, i64)>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub status: Option<ReportStatus>,
    pub offset: i64,
    pub limit: i64,
}

/// A report with its reporter, reported user and listing filled in
#[derive(Debug, Clone)]
pub struct ReportDetails {
    pub report: Report,
    pub reporter: Option<UserSummary>,
    pub reported_user: Option<UserSummary>,
    pub marketplace_item: Option<ItemSummary>,
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Report>>;

    async fn create(&self, report: &Report) -> RepoResult<()>;

    /// Persist status, notes and resolution stamps
    async fn update(&self, report: &Report) -> RepoResult<()>;

    /// Newest first, with total count
    async fn list(&self, query: &ReportQuery) -> RepoResult<(Vec<ReportDetails>, i64)>;

    async fn count_received(&self, user_id: Snowflake) -> RepoResult<i64>;

    async fn count_submitted(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Restrict the reported user and resolve the report atomically.
    /// Either both rows change or neither does.
    async fn resolve_with_restriction(
        &self,
        report: &Report,
        restriction: &Restriction,
    ) -> RepoResult<()>;
}

// ============================================================================
// Marketplace Repository
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    pub status: Option<ItemStatus>,
    pub category: Option<String>,
    pub offset: i64,
    pub limit: i64,
}

#[derive(Debug, Clone)]
pub struct ListingWithOwner {
    pub item: MarketplaceItem,
    pub owner: Option<UserSummary>,
}

#[async_trait]
pub trait MarketplaceRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<MarketplaceItem>>;

    async fn create(&self, item: &MarketplaceItem) -> RepoResult<()>;

    /// Persist status and the approval/rejection stamps
    async fn update_status(&self, item: &MarketplaceItem) -> RepoResult<()>;

    /// The moderation queue, newest first
    async fn find_pending(&self) -> RepoResult<Vec<ListingWithOwner>>;

    async fn list(&self, query: &ItemQuery) -> RepoResult<(Vec<ListingWithOwner>, i64)>;

    async fn find_by_owner(&self, user_id: Snowflake) -> RepoResult<Vec<MarketplaceItem>>;

    async fn count_by_owner(&self, user_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Wardrobe Repository
// ============================================================================

#[async_trait]
pub trait WardrobeRepository: Send + Sync {
    async fn create(&self, item: &WardrobeItem) -> RepoResult<()>;

    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<WardrobeItem>>;

    /// Items among `ids` that belong to `user_id`
    async fn find_owned(&self, user_id: Snowflake, ids: &[Snowflake]) -> RepoResult<Vec<WardrobeItem>>;

    async fn count_by_user(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Distinct non-empty `(categories, subcategories)`, sorted
    async fn distinct_categories(&self) -> RepoResult<(Vec<String>, Vec<String>)>;
}

// ============================================================================
// Outfit Repository
// ============================================================================

#[async_trait]
pub trait OutfitRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Outfit>>;

    /// Newest `worn_date` first
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Outfit>>;

    async fn create(&self, outfit: &Outfit) -> RepoResult<()>;

    async fn set_favorite(&self, id: Snowflake, is_favorite: bool) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Usage Repository
// ============================================================================

/// How often one wardrobe item was worn in a window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUsage {
    pub wardrobe_item_id: Snowflake,
    pub name: String,
    pub category: String,
    pub usage_count: i64,
}

#[async_trait]
pub trait UsageRepository: Send + Sync {
    async fn record_many(&self, records: &[UsageRecord]) -> RepoResult<()>;

    /// Per-item wear counts since `since`, most worn first
    async fn frequent(&self, user_id: Snowflake, since: DateTime<Utc>) -> RepoResult<Vec<ItemUsage>>;
}

// ============================================================================
// Settings Repository
// ============================================================================

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// The stored settings row, seeded by migration
    async fn get(&self) -> RepoResult<SystemSettings>;

    async fn update(&self, settings: &SystemSettings) -> RepoResult<()>;
}

// ============================================================================
// Analytics Repository
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total_users: i64,
    pub active_users: i64,
    pub total_reports: i64,
    pub active_listings: i64,
    pub pending_posts: i64,
}

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Headline counters; user counts only include `role = user`
    async fn metrics(&self) -> RepoResult<DashboardMetrics>;

    async fn user_registrations(&self, since: DateTime<Utc>) -> RepoResult<Vec<MonthlyCount>>;

    async fn marketplace_activity(&self, since: DateTime<Utc>) -> RepoResult<Vec<MonthlyCount>>;

    async fn reports_over_time(&self, since: DateTime<Utc>) -> RepoResult<Vec<MonthlyCount>>;

    /// Wardrobe categories by item count, descending
    async fn top_categories(&self, limit: i64) -> RepoResult<Vec<CategoryCount>>;
}
