//! Account restrictions
//!
//! A restriction is a time-boxed suspension written onto a user's account
//! status. It lapses on its own once the end date has passed.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// The four restriction lengths an admin may pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestrictionDuration {
    #[serde(rename = "1 day")]
    OneDay,
    #[serde(rename = "10 days")]
    TenDays,
    #[serde(rename = "20 days")]
    TwentyDays,
    #[serde(rename = "1 month")]
    OneMonth,
}

impl RestrictionDuration {
    pub const ALL: [Self; 4] = [Self::OneDay, Self::TenDays, Self::TwentyDays, Self::OneMonth];

    /// Parse one of the exact literals `"1 day"`, `"10 days"`, `"20 days"`, `"1 month"`
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "1 day" => Ok(Self::OneDay),
            "10 days" => Ok(Self::TenDays),
            "20 days" => Ok(Self::TwentyDays),
            "1 month" => Ok(Self::OneMonth),
            _ => Err(DomainError::InvalidRestrictionDuration),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1 day",
            Self::TenDays => "10 days",
            Self::TwentyDays => "20 days",
            Self::OneMonth => "1 month",
        }
    }

    /// Length in whole days. A month is always 30 days.
    pub const fn days(self) -> i64 {
        match self {
            Self::OneDay => 1,
            Self::TenDays => 10,
            Self::TwentyDays => 20,
            Self::OneMonth => 30,
        }
    }

    pub fn offset(self) -> Duration {
        Duration::days(self.days())
    }

    pub const fn as_millis(self) -> i64 {
        self.days() * 24 * 60 * 60 * 1000
    }
}

impl fmt::Display for RestrictionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RestrictionDuration {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A restriction decided by an admin, ready to be written onto an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction {
    pub reason: String,
    pub duration: RestrictionDuration,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub restricted_by: Snowflake,
}

impl Restriction {
    pub fn starting_at(
        now: DateTime<Utc>,
        duration: RestrictionDuration,
        reason: impl Into<String>,
        restricted_by: Snowflake,
    ) -> Self {
        Self {
            reason: reason.into(),
            duration,
            start_date: now,
            end_date: now + duration.offset(),
            restricted_by,
        }
    }

    /// Note stored on the report that triggered the restriction
    pub fn admin_note(&self) -> String {
        format!("User restricted for {}. Reason: {}", self.duration, self.reason)
    }
}

/// Restriction state stored on every user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatus {
    pub is_restricted: bool,
    pub restriction_reason: Option<String>,
    pub restriction_start_date: Option<DateTime<Utc>>,
    pub restriction_end_date: Option<DateTime<Utc>>,
    pub restriction_duration: Option<RestrictionDuration>,
    pub restricted_by: Option<Snowflake>,
}

impl AccountStatus {
    pub fn restricted(restriction: &Restriction) -> Self {
        Self {
            is_restricted: true,
            restriction_reason: Some(restriction.reason.clone()),
            restriction_start_date: Some(restriction.start_date),
            restriction_end_date: Some(restriction.end_date),
            restriction_duration: Some(restriction.duration),
            restricted_by: Some(restriction.restricted_by),
        }
    }

    /// True while the flag is set and the end date is still ahead of `now`
    pub fn is_restriction_active(&self, now: DateTime<Utc>) -> bool {
        self.is_restricted && self.restriction_end_date.is_some_and(|end| end > now)
    }
}
