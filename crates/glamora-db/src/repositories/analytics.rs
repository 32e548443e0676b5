//! PostgreSQL implementation of AnalyticsRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use glamora_core::{AnalyticsRepository, CategoryCount, DashboardMetrics, MonthlyCount, RepoResult};

use crate::models::{CategoryCountModel, MetricsModel, MonthlyCountModel};

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgAnalyticsRepository {
    pool: PgPool,
}

impl PgAnalyticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Rows of `table` created since `since`, bucketed by calendar month (UTC)
    async fn monthly(
        &self,
        table: &'static str,
        extra_filter: &'static str,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<MonthlyCount>> {
        let rows = sqlx::query_as::<_, MonthlyCountModel>(&format!(
            r"
            SELECT EXTRACT(YEAR FROM created_at AT TIME ZONE 'UTC')::INT AS year,
                   EXTRACT(MONTH FROM created_at AT TIME ZONE 'UTC')::INT AS month,
                   COUNT(*) AS count
            FROM {table}
            WHERE created_at >= $1 AND created_at <= NOW() {extra_filter}
            GROUP BY 1, 2
            ORDER BY 1, 2
            "
        ))
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(MonthlyCount::from).collect())
    }
}

#[async_trait]
impl AnalyticsRepository for PgAnalyticsRepository {
    #[instrument(skip(self))]
    async fn metrics(&self) -> RepoResult<DashboardMetrics> {
        let row = sqlx::query_as::<_, MetricsModel>(
            r"
            SELECT
                (SELECT COUNT(*) FROM users WHERE role = 'user') AS total_users,
                (SELECT COUNT(*) FROM users WHERE role = 'user' AND is_active) AS active_users,
                (SELECT COUNT(*) FROM reports) AS total_reports,
                (SELECT COUNT(*) FROM marketplace_items WHERE status = 'active') AS active_listings,
                (SELECT COUNT(*) FROM marketplace_items WHERE status = 'pending') AS pending_posts
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn user_registrations(&self, since: DateTime<Utc>) -> RepoResult<Vec<MonthlyCount>> {
        self.monthly("users", "AND role = 'user'", since).await
    }

    #[instrument(skip(self))]
    async fn marketplace_activity(&self, since: DateTime<Utc>) -> RepoResult<Vec<MonthlyCount>> {
        self.monthly("marketplace_items", "", since).await
    }

    #[instrument(skip(self))]
    async fn reports_over_time(&self, since: DateTime<Utc>) -> RepoResult<Vec<MonthlyCount>> {
        self.monthly("reports", "", since).await
    }

    #[instrument(skip(self))]
    async fn top_categories(&self, limit: i64) -> RepoResult<Vec<CategoryCount>> {
        let rows = sqlx::query_as::<_, CategoryCountModel>(
            r"
            SELECT category, COUNT(*) AS count
            FROM wardrobe_items
            GROUP BY category
            ORDER BY count DESC, category
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CategoryCount::from).collect())
    }
}
