//! PostgreSQL implementation of WardrobeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use glamora_core::{RepoResult, Snowflake, WardrobeItem, WardrobeRepository};

use crate::models::WardrobeItemModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgWardrobeRepository {
    pool: PgPool,
}

impl PgWardrobeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WardrobeRepository for PgWardrobeRepository {
    #[instrument(skip(self), fields(item_id = %item.id))]
    async fn create(&self, item: &WardrobeItem) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO wardrobe_items (id, user_id, name, category, subcategory, color, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(item.id.into_inner())
        .bind(item.user_id.into_inner())
        .bind(&item.name)
        .bind(&item.category)
        .bind(&item.subcategory)
        .bind(&item.color)
        .bind(&item.image_url)
        .bind(item.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<WardrobeItem>> {
        let rows = sqlx::query_as::<_, WardrobeItemModel>(
            r"
            SELECT id, user_id, name, category, subcategory, color, image_url, created_at
            FROM wardrobe_items
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(WardrobeItem::from).collect())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_owned(&self, user_id: Snowflake, ids: &[Snowflake]) -> RepoResult<Vec<WardrobeItem>> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, WardrobeItemModel>(
            r"
            SELECT id, user_id, name, category, subcategory, color, image_url, created_at
            FROM wardrobe_items
            WHERE user_id = $1 AND id = ANY($2)
            ",
        )
        .bind(user_id.into_inner())
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(WardrobeItem::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_user(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM wardrobe_items WHERE user_id = $1")
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn distinct_categories(&self) -> RepoResult<(Vec<String>, Vec<String>)> {
        let categories = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM wardrobe_items WHERE category <> '' ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let subcategories = sqlx::query_scalar::<_, String>(
            r"
            SELECT DISTINCT subcategory FROM wardrobe_items
            WHERE subcategory IS NOT NULL AND subcategory <> ''
            ORDER BY subcategory
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((categories, subcategories))
    }
}
