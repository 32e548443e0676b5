//! # glamora-core
//!
//! Domain layer containing entities, value objects and repository traits for
//! the wardrobe backend and its moderation workflow.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ItemStatus, MarketplaceItem, Outfit, OutfitItem, Report, ReportStatus, SystemSettings,
    UsageRecord, User, UserRole, WardrobeItem,
};
pub use error::DomainError;
pub use traits::{
    AnalyticsRepository, CategoryCount, DashboardMetrics, ItemQuery, ItemSummary, ItemUsage,
    ListingWithOwner, MarketplaceRepository, MonthlyCount, OutfitRepository, RepoResult,
    ReportDetails, ReportQuery, ReportRepository, SettingsRepository, UsageRepository,
    UserQuery, UserRepository, UserSummary, WardrobeRepository,
};
pub use value_objects::{
    AccountStatus, AnalyticsPeriod, Restriction, RestrictionDuration, Snowflake,
    SnowflakeGenerator, SnowflakeParseError, UsageRange,
};
