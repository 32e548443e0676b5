//! Authentication service
//!
//! Admin login against the configured credentials, plus registration,
//! login, token refresh and logout for app users. Every login opens a
//! refresh session in Redis keyed by the session id inside the JWT.

use chrono::Utc;
use glamora_cache::RefreshTokenData;
use glamora_common::auth::{hash_password, validate_password_strength, verify_password};
use glamora_common::{AppError, Claims, TokenPair};
use glamora_core::{DomainError, Snowflake, User, UserRole};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    AdminLoginRequest, AuthResponse, AuthUserResponse, LoginRequest, LogoutRequest,
    RefreshTokenRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

fn invalid_credentials() -> ServiceError {
    ServiceError::App(AppError::InvalidCredentials)
}

fn auth_response(message: &str, pair: TokenPair, user: &User) -> AuthResponse {
    AuthResponse {
        message: message.to_string(),
        token: pair.access_token,
        refresh_token: pair.refresh_token,
        token_type: pair.token_type,
        expires_in: pair.expires_in,
        user: AuthUserResponse::from(user),
    }
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check the admin username and password against configuration, then
    /// sign in as the admin account bound to the configured email
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn admin_login(&self, request: AdminLoginRequest) -> ServiceResult<AuthResponse> {
        let admin = self.ctx.admin_config();

        let Some(expected_hash) = admin.password_hash.as_deref() else {
            warn!("Admin login refused: no admin password hash configured");
            return Err(invalid_credentials());
        };

        if request.username != admin.username {
            warn!("Admin login failed: unknown username");
            return Err(invalid_credentials());
        }

        if !verify_password(&request.password, expected_hash)? {
            warn!("Admin login failed: wrong password");
            return Err(invalid_credentials());
        }

        let user = self.ensure_admin_account(expected_hash).await?;
        if !user.is_active {
            warn!(user_id = %user.id, "Admin login refused: account deactivated");
            return Err(DomainError::AccountDeactivated.into());
        }

        let pair = self.open_session(&user).await?;
        info!(user_id = %user.id, "Admin logged in");

        Ok(auth_response("Login successful", pair, &user))
    }

    /// Find or create the admin user, promoting it when an older row with
    /// the same email is still a plain user
    async fn ensure_admin_account(&self, password_hash: &str) -> ServiceResult<User> {
        let admin = self.ctx.admin_config();

        match self.ctx.user_repo().find_by_email(&admin.email).await? {
            Some(user) if user.is_admin() => Ok(user),
            Some(mut user) => {
                warn!(user_id = %user.id, "Promoting configured admin email to admin role");
                user.role = UserRole::Admin;
                user.updated_at = Utc::now();
                self.ctx.user_repo().update(&user).await?;
                Ok(user)
            }
            None => {
                let user = User::new_admin(
                    self.ctx.generate_id(),
                    admin.name.clone(),
                    admin.email.clone(),
                );
                self.ctx.user_repo().create(&user, password_hash).await?;
                info!(user_id = %user.id, "Created admin account");
                Ok(user)
            }
        }
    }

    /// Register a new app user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password)?;

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(self.ctx.generate_id(), request.name, request.email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");

        let pair = self.open_session(&user).await?;
        Ok(auth_response("Registration successful", pair, &user))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                invalid_credentials()
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(invalid_credentials());
        }

        if !user.is_active {
            warn!(user_id = %user.id, "Login refused: account deactivated");
            return Err(DomainError::AccountDeactivated.into());
        }

        let pair = self.open_session(&user).await?;
        info!(user_id = %user.id, "User logged in");

        Ok(auth_response("Login successful", pair, &user))
    }

    /// Rotate a refresh token. The old session is revoked.
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        self.rotate(&request.refresh_token, false).await
    }

    /// Same as [`Self::refresh`] but only for admin accounts
    #[instrument(skip(self, request))]
    pub async fn admin_refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        self.rotate(&request.refresh_token, true).await
    }

    async fn rotate(&self, refresh_token: &str, require_admin: bool) -> ServiceResult<AuthResponse> {
        let (claims, session) = self.live_session(refresh_token).await?;
        let user_id = claims.user_id()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        self.ctx.refresh_token_store().revoke(&session.session_id).await?;

        if !user.is_active {
            warn!(user_id = %user.id, "Refresh refused: account deactivated");
            return Err(DomainError::AccountDeactivated.into());
        }
        if require_admin && !user.is_admin() {
            warn!(user_id = %user.id, "Admin refresh refused: not an admin");
            return Err(DomainError::AdminRequired.into());
        }

        let pair = self.open_session(&user).await?;
        info!(user_id = %user.id, "Tokens refreshed");

        Ok(auth_response("Token refreshed", pair, &user))
    }

    /// End one session, or every session of the user when no token is given
    #[instrument(skip(self, request))]
    pub async fn logout(&self, user_id: Snowflake, request: LogoutRequest) -> ServiceResult<()> {
        match request.refresh_token.as_deref() {
            Some(token) => {
                let (claims, session) = self.live_session(token).await?;
                if claims.user_id()? != user_id {
                    warn!(user_id = %user_id, "Logout with another user's refresh token");
                    return Err(ServiceError::App(AppError::InvalidToken));
                }
                self.ctx.refresh_token_store().revoke(&session.session_id).await?;
            }
            None => {
                self.ctx.refresh_token_store().revoke_all_for_user(user_id).await?;
            }
        }

        info!(user_id = %user_id, "User logged out");
        Ok(())
    }

    /// Resolve an access token to the user it was issued for.
    ///
    /// The role inside the token is informational only; callers check the
    /// role on the returned row.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.jwt_service().validate_access_token(token)?;
        let user_id = claims.user_id()?;

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))
    }

    async fn open_session(&self, user: &User) -> ServiceResult<TokenPair> {
        let session_id = Uuid::new_v4().to_string();
        let pair = self
            .ctx
            .jwt_service()
            .issue(user.id, user.role, Some(session_id.clone()))?;

        self.ctx
            .refresh_token_store()
            .store(&RefreshTokenData::new(user.id, session_id))
            .await?;

        Ok(pair)
    }

    async fn live_session(&self, refresh_token: &str) -> ServiceResult<(Claims, RefreshTokenData)> {
        let claims = self.ctx.jwt_service().validate_refresh_token(refresh_token)?;
        let session_id = claims
            .session_id
            .as_deref()
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        let session = self
            .ctx
            .refresh_token_store()
            .get(session_id)
            .await?
            .ok_or_else(|| {
                warn!(session_id = %session_id, "Refresh session revoked or expired");
                ServiceError::App(AppError::InvalidToken)
            })?;

        if Some(session.user_id) != claims.user_id().ok() {
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        Ok((claims, session))
    }
}
