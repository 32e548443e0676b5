//! Refresh-token sessions
//!
//! Each login creates a session id carried inside the refresh JWT. The
//! session entry lives under `refresh_session:{id}` with the refresh
//! token's lifetime, and `user_sessions:{user}` indexes a user's sessions
//! so they can all be revoked when the account is deactivated.

use chrono::Utc;
use glamora_core::Snowflake;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use crate::pool::{RedisPool, RedisResult};

const SESSION_PREFIX: &str = "refresh_session:";
const USER_SESSIONS_PREFIX: &str = "user_sessions:";

/// Seven days, matching the default refresh token expiry
const DEFAULT_TTL: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenData {
    pub user_id: Snowflake,
    pub session_id: String,
    /// Unix seconds
    pub created_at: i64,
}

impl RefreshTokenData {
    #[must_use]
    pub fn new(user_id: Snowflake, session_id: String) -> Self {
        Self {
            user_id,
            session_id,
            created_at: Utc::now().timestamp(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RefreshTokenStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RefreshTokenStore {
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self::with_ttl(pool, DEFAULT_TTL)
    }

    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    #[must_use]
    pub fn pool(&self) -> &RedisPool {
        &self.pool
    }

    fn key(session_id: &str) -> String {
        format!("{SESSION_PREFIX}{session_id}")
    }

    fn user_key(user_id: Snowflake) -> String {
        format!("{USER_SESSIONS_PREFIX}{user_id}")
    }

    pub async fn store(&self, data: &RefreshTokenData) -> RedisResult<()> {
        self.pool
            .set_json(&Self::key(&data.session_id), data, self.ttl_seconds)
            .await?;

        let user_key = Self::user_key(data.user_id);
        let mut conn = self.pool.get().await?;
        conn.sadd::<_, _, ()>(&user_key, &data.session_id).await?;
        conn.expire::<_, ()>(&user_key, i64::try_from(self.ttl_seconds).unwrap_or(i64::MAX))
            .await?;

        tracing::debug!(user_id = %data.user_id, session_id = %data.session_id, "Stored refresh session");
        Ok(())
    }

    /// The live session, or `None` once it expired or was revoked
    pub async fn get(&self, session_id: &str) -> RedisResult<Option<RefreshTokenData>> {
        self.pool.get_json(&Self::key(session_id)).await
    }

    pub async fn revoke(&self, session_id: &str) -> RedisResult<bool> {
        if let Some(data) = self.get(session_id).await? {
            let mut conn = self.pool.get().await?;
            conn.srem::<_, _, ()>(Self::user_key(data.user_id), session_id)
                .await?;
        }

        let deleted = self.pool.delete(&Self::key(session_id)).await?;
        if deleted {
            tracing::debug!(session_id = %session_id, "Revoked refresh session");
        }
        Ok(deleted)
    }

    /// Sign a user out everywhere
    pub async fn revoke_all_for_user(&self, user_id: Snowflake) -> RedisResult<usize> {
        let user_key = Self::user_key(user_id);
        let mut conn = self.pool.get().await?;

        let session_ids: Vec<String> = conn.smembers(&user_key).await?;
        let mut keys: Vec<String> = session_ids.iter().map(|id| Self::key(id)).collect();
        keys.push(user_key);
        conn.del::<_, ()>(&keys).await?;

        tracing::info!(user_id = %user_id, count = session_ids.len(), "Revoked all refresh sessions");
        Ok(session_ids.len())
    }
}
