//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in glamora-core.

mod analytics;
mod error;
mod marketplace;
mod outfit;
mod report;
mod settings;
mod usage;
mod user;
mod wardrobe;

pub use analytics::PgAnalyticsRepository;
pub use marketplace::PgMarketplaceRepository;
pub use outfit::PgOutfitRepository;
pub use report::PgReportRepository;
pub use settings::PgSettingsRepository;
pub use usage::PgUsageRepository;
pub use user::PgUserRepository;
pub use wardrobe::PgWardrobeRepository;
