//! Domain entities - core business objects

mod marketplace_item;
mod outfit;
mod report;
mod settings;
mod usage;
mod user;
mod wardrobe_item;

pub use marketplace_item::{ItemStatus, MarketplaceItem};
pub use outfit::{Outfit, OutfitItem};
pub use report::{Report, ReportStatus};
pub use settings::SystemSettings;
pub use usage::UsageRecord;
pub use user::{User, UserRole};
pub use wardrobe_item::WardrobeItem;
