//! PostgreSQL implementation of UsageRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use glamora_core::{ItemUsage, RepoResult, Snowflake, UsageRecord, UsageRepository};

use crate::models::ItemUsageModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgUsageRepository {
    pool: PgPool,
}

impl PgUsageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsageRepository for PgUsageRepository {
    #[instrument(skip(self, records), fields(count = records.len()))]
    async fn record_many(&self, records: &[UsageRecord]) -> RepoResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let mut ids = Vec::with_capacity(records.len());
        let mut users = Vec::with_capacity(records.len());
        let mut items = Vec::with_capacity(records.len());
        let mut outfits = Vec::with_capacity(records.len());
        let mut worn = Vec::with_capacity(records.len());
        for record in records {
            ids.push(record.id.into_inner());
            users.push(record.user_id.into_inner());
            items.push(record.wardrobe_item_id.into_inner());
            outfits.push(record.outfit_id.into_inner());
            worn.push(record.worn_at);
        }

        sqlx::query(
            r"
            INSERT INTO clothing_usage (id, user_id, wardrobe_item_id, outfit_id, worn_at)
            SELECT * FROM UNNEST($1::BIGINT[], $2::BIGINT[], $3::BIGINT[], $4::BIGINT[], $5::TIMESTAMPTZ[])
            ",
        )
        .bind(&ids)
        .bind(&users)
        .bind(&items)
        .bind(&outfits)
        .bind(&worn)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn frequent(&self, user_id: Snowflake, since: DateTime<Utc>) -> RepoResult<Vec<ItemUsage>> {
        let rows = sqlx::query_as::<_, ItemUsageModel>(
            r"
            SELECT w.id AS wardrobe_item_id, w.name, w.category, COUNT(*) AS usage_count
            FROM clothing_usage c
            JOIN wardrobe_items w ON w.id = c.wardrobe_item_id
            WHERE c.user_id = $1 AND c.worn_at >= $2
            GROUP BY w.id, w.name, w.category
            ORDER BY usage_count DESC, w.name
            ",
        )
        .bind(user_id.into_inner())
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ItemUsage::from).collect())
    }
}
