//! Redis-backed refresh-token sessions

mod refresh_token;

pub use refresh_token::{RefreshTokenData, RefreshTokenStore};
