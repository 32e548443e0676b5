//! User model -> entity mapper

use glamora_core::{AccountStatus, RestrictionDuration, Snowflake, User, UserSummary};

use super::corrupt_column;
use crate::models::UserModel;
use glamora_core::DomainError;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse()
            .map_err(|_| corrupt_column("users.role", &model.role))?;

        let restriction_duration = model
            .restriction_duration
            .as_deref()
            .map(|d| {
                RestrictionDuration::parse(d)
                    .map_err(|_| corrupt_column("users.restriction_duration", d))
            })
            .transpose()?;

        Ok(User {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            role,
            is_active: model.is_active,
            profile_picture: model.profile_picture,
            account_status: AccountStatus {
                is_restricted: model.is_restricted,
                restriction_reason: model.restriction_reason,
                restriction_start_date: model.restriction_start_date,
                restriction_end_date: model.restriction_end_date,
                restriction_duration,
                restricted_by: model.restricted_by.map(Snowflake::new),
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Build a summary from LEFT JOIN columns; `None` when the user row is gone
pub fn user_summary(id: i64, name: Option<String>, email: Option<String>) -> Option<UserSummary> {
    match (name, email) {
        (Some(name), Some(email)) => Some(UserSummary {
            id: Snowflake::new(id),
            name,
            email,
        }),
        _ => None,
    }
}
