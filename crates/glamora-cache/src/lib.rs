//! # glamora-cache
//!
//! Redis layer for login sessions.
//!
//! - **Connection Pool**: managed Redis connections with deadpool
//! - **Refresh Tokens**: one entry per login session, indexed per user so
//!   an account can be signed out everywhere
//!
//! ```ignore
//! use glamora_cache::{RedisPool, RefreshTokenData, RefreshTokenStore};
//!
//! let pool = RedisPool::from_config(&config.redis)?;
//! let sessions = RefreshTokenStore::with_ttl(pool, 604_800);
//! sessions.store(&RefreshTokenData::new(user_id, session_id)).await?;
//! ```

pub mod pool;
pub mod session;

pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use session::{RefreshTokenData, RefreshTokenStore};
