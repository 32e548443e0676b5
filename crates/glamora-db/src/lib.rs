//! # glamora-db
//!
//! PostgreSQL implementations of the repository traits defined in
//! `glamora-core`, built on SQLx.
//!
//! - Connection pool management and embedded migrations
//! - Row models with SQLx `FromRow` derives
//! - Row to entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use glamora_common::AppConfig;
//! use glamora_db::{create_pool, run_migrations, PgUserRepository};
//!
//! async fn example(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&config.database).await?;
//!     run_migrations(&pool).await?;
//!     let users = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, run_migrations, PgPool, PoolOptions};
pub use repositories::{
    PgAnalyticsRepository, PgMarketplaceRepository, PgOutfitRepository, PgReportRepository,
    PgSettingsRepository, PgUsageRepository, PgUserRepository, PgWardrobeRepository,
};
