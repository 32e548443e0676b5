//! Service context - dependency container for services
//!
//! Holds the repositories, the refresh-token store and the auth helpers
//! every service borrows.

use std::sync::Arc;

use glamora_cache::{RedisPool, RefreshTokenStore};
use glamora_common::{AdminConfig, JwtService};
use glamora_core::{
    AnalyticsRepository, MarketplaceRepository, OutfitRepository, ReportRepository,
    SettingsRepository, Snowflake, SnowflakeGenerator, UsageRepository, UserRepository,
    WardrobeRepository,
};
use glamora_db::{
    PgAnalyticsRepository, PgMarketplaceRepository, PgOutfitRepository, PgPool,
    PgReportRepository, PgSettingsRepository, PgUsageRepository, PgUserRepository,
    PgWardrobeRepository,
};

use super::error::{ServiceError, ServiceResult};

#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    redis_pool: RedisPool,

    user_repo: Arc<dyn UserRepository>,
    report_repo: Arc<dyn ReportRepository>,
    marketplace_repo: Arc<dyn MarketplaceRepository>,
    wardrobe_repo: Arc<dyn WardrobeRepository>,
    outfit_repo: Arc<dyn OutfitRepository>,
    usage_repo: Arc<dyn UsageRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
    analytics_repo: Arc<dyn AnalyticsRepository>,

    refresh_token_store: RefreshTokenStore,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    admin: Arc<AdminConfig>,
}

impl ServiceContext {
    /// Wire every repository to the PostgreSQL implementation
    pub fn new(
        pool: PgPool,
        redis_pool: RedisPool,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        admin: AdminConfig,
    ) -> Self {
        let refresh_ttl = u64::try_from(jwt_service.refresh_token_expiry()).unwrap_or(0);

        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            report_repo: Arc::new(PgReportRepository::new(pool.clone())),
            marketplace_repo: Arc::new(PgMarketplaceRepository::new(pool.clone())),
            wardrobe_repo: Arc::new(PgWardrobeRepository::new(pool.clone())),
            outfit_repo: Arc::new(PgOutfitRepository::new(pool.clone())),
            usage_repo: Arc::new(PgUsageRepository::new(pool.clone())),
            settings_repo: Arc::new(PgSettingsRepository::new(pool.clone())),
            analytics_repo: Arc::new(PgAnalyticsRepository::new(pool.clone())),
            refresh_token_store: RefreshTokenStore::with_ttl(redis_pool.clone(), refresh_ttl),
            pool,
            redis_pool,
            jwt_service,
            snowflake_generator,
            admin: Arc::new(admin),
        }
    }

    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::default()
    }

    // === Pools ===

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    pub fn marketplace_repo(&self) -> &dyn MarketplaceRepository {
        self.marketplace_repo.as_ref()
    }

    pub fn wardrobe_repo(&self) -> &dyn WardrobeRepository {
        self.wardrobe_repo.as_ref()
    }

    pub fn outfit_repo(&self) -> &dyn OutfitRepository {
        self.outfit_repo.as_ref()
    }

    pub fn usage_repo(&self) -> &dyn UsageRepository {
        self.usage_repo.as_ref()
    }

    pub fn settings_repo(&self) -> &dyn SettingsRepository {
        self.settings_repo.as_ref()
    }

    pub fn analytics_repo(&self) -> &dyn AnalyticsRepository {
        self.analytics_repo.as_ref()
    }

    // === Sessions and auth ===

    pub fn refresh_token_store(&self) -> &RefreshTokenStore {
        &self.refresh_token_store
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn admin_config(&self) -> &AdminConfig {
        self.admin.as_ref()
    }

    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &self.redis_pool)
            .field("jwt_service", &self.jwt_service)
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish_non_exhaustive()
    }
}

/// Builder for [`ServiceContext`]. The Snowflake generator defaults to worker 0.
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<RedisPool>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    admin: Option<AdminConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: RedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn admin(mut self, admin: AdminConfig) -> Self {
        self.admin = Some(admin);
        self
    }

    /// # Errors
    /// Returns `ServiceError::Validation` if a required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::validation(format!("{name} is required"));

        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| missing("pool"))?,
            self.redis_pool.ok_or_else(|| missing("redis_pool"))?,
            self.jwt_service.ok_or_else(|| missing("jwt_service"))?,
            self.snowflake_generator.unwrap_or_default(),
            self.admin.ok_or_else(|| missing("admin"))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_pool() {
        let err = ServiceContext::builder().build().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: pool is required");
        assert_eq!(err.status_code(), 400);
    }
}
