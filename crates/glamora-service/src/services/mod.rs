//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of
//! one request and orchestrates repositories, the session store and the
//! domain rules.

pub mod admin_user;
pub mod analytics;
pub mod auth;
pub mod context;
pub mod error;
pub mod marketplace;
pub mod moderation;
pub mod outfit;
pub mod report;
pub mod settings;
pub mod usage;
pub mod user;
pub mod wardrobe;

pub use admin_user::AdminUserService;
pub use analytics::AnalyticsService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use marketplace::MarketplaceService;
pub use moderation::ModerationService;
pub use outfit::OutfitService;
pub use report::ReportService;
pub use settings::SettingsService;
pub use usage::UsageService;
pub use user::UserService;
pub use wardrobe::WardrobeService;
