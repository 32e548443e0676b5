//! The signed-in user's own profile

use glamora_core::{DomainError, Snowflake, User};
use tracing::{info, instrument};

use crate::dto::{ProfileResponse, UpdateProfileRequest, UserResponse, UserUpdatedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn get_me(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let user = self.find(user_id).await?;
        Ok(ProfileResponse {
            user: UserResponse::from(&user),
        })
    }

    #[instrument(skip(self, request))]
    pub async fn update_me(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserUpdatedResponse> {
        let mut user = self.find(user_id).await?;

        if let Some(email) = request.email {
            let email = email.trim().to_string();
            if !email.eq_ignore_ascii_case(&user.email)
                && self.ctx.user_repo().email_exists(&email).await?
            {
                return Err(DomainError::EmailAlreadyExists.into());
            }
            user.email = email;
        }
        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(picture) = request.profile_picture {
            user.profile_picture = Some(picture);
        }

        self.ctx.user_repo().update(&user).await?;
        info!(user_id = %user_id, "Profile updated");

        Ok(UserUpdatedResponse {
            message: "Profile updated successfully".to_string(),
            user: UserResponse::from(&user),
        })
    }

    async fn find(&self, user_id: Snowflake) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }
}
