//! Admin user management

use glamora_core::{DomainError, Snowflake, User, UserQuery, UserRole};
use tracing::{info, instrument, warn};

use crate::dto::{
    parse_filter, AdminUpdateUserRequest, MessageResponse, PageMeta, PageRequest,
    UserDetailResponse, UserListQuery, UserListResponse, UserResponse, UserStats,
    UserUpdatedResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// `active` / `inactive` to `is_active`; absent, empty and `all` mean any
fn parse_activity(status: Option<&str>) -> Result<Option<bool>, DomainError> {
    match status.map(str::trim) {
        None | Some("" | "all") => Ok(None),
        Some("active") => Ok(Some(true)),
        Some("inactive") => Ok(Some(false)),
        Some(other) => Err(DomainError::ValidationError(format!("Invalid status: {other}"))),
    }
}

pub struct AdminUserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminUserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Page through app users. Admin accounts only show up when the
    /// `role` filter asks for them.
    #[instrument(skip(self))]
    pub async fn list(&self, query: UserListQuery, page: PageRequest) -> ServiceResult<UserListResponse> {
        let role = parse_filter::<UserRole>(query.role.as_deref())?.unwrap_or(UserRole::User);
        let is_active = parse_activity(query.status.as_deref())?;

        let (users, total) = self
            .ctx
            .user_repo()
            .list(&UserQuery {
                search: query.search,
                role: Some(role),
                is_active,
                offset: page.offset(),
                limit: page.limit,
            })
            .await?;

        Ok(UserListResponse {
            users: users.iter().map(UserResponse::from).collect(),
            page: PageMeta::new(total, page.page, page.limit),
        })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, user_id: Snowflake) -> ServiceResult<UserDetailResponse> {
        let user = self.find(user_id).await?;

        let stats = UserStats {
            wardrobe_items: self.ctx.wardrobe_repo().count_by_user(user_id).await?,
            marketplace_items: self.ctx.marketplace_repo().count_by_owner(user_id).await?,
            reports_received: self.ctx.report_repo().count_received(user_id).await?,
            reports_submitted: self.ctx.report_repo().count_submitted(user_id).await?,
        };

        Ok(UserDetailResponse {
            user: UserResponse::from(&user),
            stats,
        })
    }

    /// Change role and/or activity
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        request: AdminUpdateUserRequest,
    ) -> ServiceResult<UserUpdatedResponse> {
        let mut user = self.find(user_id).await?;

        if let Some(role) = request.role.as_deref() {
            user.role = role.trim().parse()?;
        }
        let deactivating = request.is_active == Some(false) && user.is_active;
        if let Some(is_active) = request.is_active {
            user.is_active = is_active;
        }

        self.ctx.user_repo().update(&user).await?;
        if deactivating {
            self.end_sessions(user_id).await;
        }

        info!(user_id = %user_id, role = %user.role, is_active = user.is_active, "User updated by admin");

        Ok(UserUpdatedResponse {
            message: "User updated successfully".to_string(),
            user: UserResponse::from(&user),
        })
    }

    /// Soft delete: the row stays, `is_active` becomes false
    #[instrument(skip(self))]
    pub async fn deactivate(&self, user_id: Snowflake) -> ServiceResult<MessageResponse> {
        self.ctx.user_repo().deactivate(user_id).await?;
        self.end_sessions(user_id).await;

        info!(user_id = %user_id, "User deactivated");
        Ok(MessageResponse::new("User deactivated successfully"))
    }

    async fn find(&self, user_id: Snowflake) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }

    /// The row is already inactive, so a Redis failure here only delays
    /// logout until the next refresh attempt is refused
    async fn end_sessions(&self, user_id: Snowflake) {
        if let Err(e) = self.ctx.refresh_token_store().revoke_all_for_user(user_id).await {
            warn!(user_id = %user_id, error = %e, "Failed to revoke sessions");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_activity() {
        assert_eq!(parse_activity(None).unwrap(), None);
        assert_eq!(parse_activity(Some("all")).unwrap(), None);
        assert_eq!(parse_activity(Some("active")).unwrap(), Some(true));
        assert_eq!(parse_activity(Some("inactive")).unwrap(), Some(false));
        assert!(parse_activity(Some("banned")).unwrap_err().is_validation());
    }
}
