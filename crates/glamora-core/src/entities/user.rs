//! User entity - a wardrobe app account or an administrator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{AccountStatus, Restriction, Snowflake};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub profile_picture: Option<String>,
    pub account_status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            role: UserRole::User,
            is_active: true,
            profile_picture: None,
            account_status: AccountStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn new_admin(id: Snowflake, name: String, email: String) -> Self {
        Self {
            role: UserRole::Admin,
            ..Self::new(id, name, email)
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_restricted_at(&self, now: DateTime<Utc>) -> bool {
        self.account_status.is_restriction_active(now)
    }

    /// Fails when the account may not perform user-facing writes at `now`
    pub fn ensure_can_act(&self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if !self.is_active {
            return Err(DomainError::AccountDeactivated);
        }
        if self.is_restricted_at(now) {
            if let Some(until) = self.account_status.restriction_end_date {
                return Err(DomainError::AccountRestricted { until });
            }
        }
        Ok(())
    }

    /// Apply a restriction. The account stays active.
    pub fn restrict(&mut self, restriction: &Restriction) {
        self.account_status = AccountStatus::restricted(restriction);
        self.updated_at = Utc::now();
    }

    pub fn lift_restriction(&mut self) {
        self.account_status = AccountStatus::default();
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
