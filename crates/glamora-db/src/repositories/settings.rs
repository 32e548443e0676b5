//! PostgreSQL implementation of SettingsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use glamora_core::{RepoResult, Snowflake, SettingsRepository, SystemSettings};

use crate::models::SystemSettingsModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    #[instrument(skip(self))]
    async fn get(&self) -> RepoResult<SystemSettings> {
        let row = sqlx::query_as::<_, SystemSettingsModel>(
            r"
            SELECT community_guidelines, max_file_size_mb, allowed_file_types,
                   auto_moderation_enabled, report_threshold, updated_by, updated_at
            FROM system_settings
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        // The migration seeds the row; fall back to defaults if it was removed
        Ok(row.map(SystemSettings::from).unwrap_or_default())
    }

    #[instrument(skip(self, settings))]
    async fn update(&self, settings: &SystemSettings) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO system_settings (id, community_guidelines, max_file_size_mb,
                                         allowed_file_types, auto_moderation_enabled,
                                         report_threshold, updated_by, updated_at)
            VALUES (1, $1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE
            SET community_guidelines = EXCLUDED.community_guidelines,
                max_file_size_mb = EXCLUDED.max_file_size_mb,
                allowed_file_types = EXCLUDED.allowed_file_types,
                auto_moderation_enabled = EXCLUDED.auto_moderation_enabled,
                report_threshold = EXCLUDED.report_threshold,
                updated_by = EXCLUDED.updated_by,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(&settings.community_guidelines)
        .bind(settings.max_file_size_mb)
        .bind(&settings.allowed_file_types)
        .bind(settings.auto_moderation_enabled)
        .bind(settings.report_threshold)
        .bind(settings.updated_by.map(Snowflake::into_inner))
        .bind(settings.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
