//! PostgreSQL implementation of MarketplaceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use glamora_core::{
    DomainError, ItemQuery, ListingWithOwner, MarketplaceItem, MarketplaceRepository, RepoResult,
    Snowflake,
};

use crate::models::{ListingWithOwnerModel, MarketplaceItemModel};

use super::error::{map_db_error, map_foreign_key_violation};

const ITEM_COLUMNS: &str = "m.id, m.user_id, m.name, m.description, m.category, m.price, \
     m.image_url, m.status, m.approved_by, m.approved_at, m.rejection_reason, m.rejected_by, \
     m.rejected_at, m.created_at, m.updated_at";

#[derive(Clone)]
pub struct PgMarketplaceRepository {
    pool: PgPool,
}

impl PgMarketplaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_listings(rows: Vec<ListingWithOwnerModel>) -> RepoResult<Vec<ListingWithOwner>> {
    rows.into_iter().map(ListingWithOwner::try_from).collect()
}

#[async_trait]
impl MarketplaceRepository for PgMarketplaceRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<MarketplaceItem>> {
        sqlx::query_as::<_, MarketplaceItemModel>(&format!(
            "SELECT {ITEM_COLUMNS} FROM marketplace_items m WHERE m.id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .map(MarketplaceItem::try_from)
        .transpose()
    }

    #[instrument(skip(self), fields(item_id = %item.id))]
    async fn create(&self, item: &MarketplaceItem) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO marketplace_items (id, user_id, name, description, category, price,
                                           image_url, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(item.id.into_inner())
        .bind(item.user_id.into_inner())
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.category)
        .bind(item.price)
        .bind(&item.image_url)
        .bind(item.status.as_str())
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::UserNotFound(item.user_id)))?;

        Ok(())
    }

    #[instrument(skip(self), fields(item_id = %item.id, status = %item.status))]
    async fn update_status(&self, item: &MarketplaceItem) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE marketplace_items
            SET status = $2, approved_by = $3, approved_at = $4, rejection_reason = $5,
                rejected_by = $6, rejected_at = $7, updated_at = $8
            WHERE id = $1
            ",
        )
        .bind(item.id.into_inner())
        .bind(item.status.as_str())
        .bind(item.approved_by.map(Snowflake::into_inner))
        .bind(item.approved_at)
        .bind(&item.rejection_reason)
        .bind(item.rejected_by.map(Snowflake::into_inner))
        .bind(item.rejected_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ItemNotFound(item.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_pending(&self) -> RepoResult<Vec<ListingWithOwner>> {
        let rows = sqlx::query_as::<_, ListingWithOwnerModel>(&format!(
            r"
            SELECT {ITEM_COLUMNS}, u.name AS owner_name, u.email AS owner_email
            FROM marketplace_items m
            LEFT JOIN users u ON u.id = m.user_id
            WHERE m.status = 'pending'
            ORDER BY m.created_at DESC
            "
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_listings(rows)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &ItemQuery) -> RepoResult<(Vec<ListingWithOwner>, i64)> {
        const FILTER: &str = r"
            WHERE ($1::TEXT IS NULL OR m.status = $1)
              AND ($2::TEXT IS NULL OR m.category = $2)
        ";
        let status = query.status.map(|s| s.as_str());

        let rows = sqlx::query_as::<_, ListingWithOwnerModel>(&format!(
            r"
            SELECT {ITEM_COLUMNS}, u.name AS owner_name, u.email AS owner_email
            FROM marketplace_items m
            LEFT JOIN users u ON u.id = m.user_id
            {FILTER}
            ORDER BY m.created_at DESC
            LIMIT $3 OFFSET $4
            "
        ))
        .bind(status)
        .bind(&query.category)
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM marketplace_items m {FILTER}"
        ))
        .bind(status)
        .bind(&query.category)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((into_listings(rows)?, total))
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, user_id: Snowflake) -> RepoResult<Vec<MarketplaceItem>> {
        sqlx::query_as::<_, MarketplaceItemModel>(&format!(
            "SELECT {ITEM_COLUMNS} FROM marketplace_items m WHERE m.user_id = $1 ORDER BY m.created_at DESC"
        ))
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?
        .into_iter()
        .map(MarketplaceItem::try_from)
        .collect()
    }

    #[instrument(skip(self))]
    async fn count_by_owner(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM marketplace_items WHERE user_id = $1")
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
