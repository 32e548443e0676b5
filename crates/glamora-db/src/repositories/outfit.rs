//! PostgreSQL implementation of OutfitRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use glamora_core::{DomainError, Outfit, OutfitRepository, RepoResult, Snowflake};

use crate::models::OutfitModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgOutfitRepository {
    pool: PgPool,
}

impl PgOutfitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OutfitRepository for PgOutfitRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Outfit>> {
        let row = sqlx::query_as::<_, OutfitModel>(
            r"
            SELECT id, user_id, name, items, occasion, weather, notes, is_favorite, worn_date, created_at
            FROM outfits
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Outfit::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Outfit>> {
        let rows = sqlx::query_as::<_, OutfitModel>(
            r"
            SELECT id, user_id, name, items, occasion, weather, notes, is_favorite, worn_date, created_at
            FROM outfits
            WHERE user_id = $1
            ORDER BY worn_date DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Outfit::from).collect())
    }

    #[instrument(skip(self), fields(outfit_id = %outfit.id))]
    async fn create(&self, outfit: &Outfit) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO outfits (id, user_id, name, items, occasion, weather, notes, is_favorite,
                                 worn_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(outfit.id.into_inner())
        .bind(outfit.user_id.into_inner())
        .bind(&outfit.name)
        .bind(Json(&outfit.items))
        .bind(&outfit.occasion)
        .bind(&outfit.weather)
        .bind(&outfit.notes)
        .bind(outfit.is_favorite)
        .bind(outfit.worn_date)
        .bind(outfit.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_favorite(&self, id: Snowflake, is_favorite: bool) -> RepoResult<()> {
        let result = sqlx::query("UPDATE outfits SET is_favorite = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(is_favorite)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::OutfitNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM outfits WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::OutfitNotFound(id));
        }

        Ok(())
    }
}
