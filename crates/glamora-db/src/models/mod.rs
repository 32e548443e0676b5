//! Database models - SQLx-compatible structs for PostgreSQL tables

mod analytics;
mod marketplace_item;
mod outfit;
mod report;
mod settings;
mod usage;
mod user;
mod wardrobe_item;

pub use analytics::{CategoryCountModel, MetricsModel, MonthlyCountModel};
pub use marketplace_item::{ListingWithOwnerModel, MarketplaceItemModel};
pub use outfit::OutfitModel;
pub use report::{ReportDetailsModel, ReportModel};
pub use settings::SystemSettingsModel;
pub use usage::ItemUsageModel;
pub use user::UserModel;
pub use wardrobe_item::WardrobeItemModel;
