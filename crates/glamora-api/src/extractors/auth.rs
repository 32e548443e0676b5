//! Authentication extractors
//!
//! [`AuthUser`] trusts the signed token alone. [`AdminUser`] and
//! [`ActiveUser`] also load the account, because role and restriction
//! state can change while a token is still valid.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chrono::Utc;
use glamora_common::Claims;
use glamora_core::{DomainError, Snowflake, User, UserRole};
use glamora_service::{AuthService, ServiceError};

use crate::response::ApiError;
use crate::state::AppState;

async fn bearer_token<S>(parts: &mut Parts, state: &S) -> Result<String, ApiError>
where
    S: Send + Sync,
{
    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingAuth)?;

    Ok(bearer.token().to_string())
}

async fn bearer_claims<S>(parts: &mut Parts, state: &S) -> Result<Claims, ApiError>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    let token = bearer_token(parts, state).await?;

    AppState::from_ref(state)
        .jwt_service()
        .validate_access_token(&token)
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected access token");
            ApiError::App(e)
        })
}

async fn load_user(state: &AppState, user_id: Snowflake) -> Result<Option<User>, ApiError> {
    state
        .service_context()
        .user_repo()
        .find_by_id(user_id)
        .await
        .map_err(|e| ApiError::Service(ServiceError::from(e)))
}

/// Caller identified by a valid access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Snowflake,
    /// Role at the time the token was issued
    pub role: UserRole,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let claims = bearer_claims(parts, state).await?;
        Ok(Self {
            user_id: claims.user_id()?,
            role: claims.role,
        })
    }
}

/// An active account whose stored role is `admin`.
///
/// Token problems are 401; a token for a missing, deactivated or
/// non-admin account is 403.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

impl AdminUser {
    pub fn id(&self) -> Snowflake {
        self.0.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let claims = bearer_claims(parts, state).await?;
        let user_id = claims.user_id()?;
        let app_state = AppState::from_ref(state);

        match load_user(&app_state, user_id).await? {
            Some(user) if user.is_admin() && user.is_active => Ok(Self(user)),
            _ => {
                tracing::warn!(user_id = %user_id, "Admin route refused");
                Err(DomainError::AdminRequired.into())
            }
        }
    }
}

/// A user allowed to write: active and not under a restriction that is
/// still running
#[derive(Debug, Clone)]
pub struct ActiveUser(pub User);

impl ActiveUser {
    pub fn id(&self) -> Snowflake {
        self.0.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ActiveUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts, state).await?;
        let app_state = AppState::from_ref(state);

        let user = AuthService::new(app_state.service_context())
            .authenticate(&token)
            .await?;
        let user_id = user.id;

        user.ensure_can_act(Utc::now()).map_err(|e| {
            tracing::info!(user_id = %user_id, code = e.code(), "Write blocked");
            e
        })?;

        Ok(Self(user))
    }
}
