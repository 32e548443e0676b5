//! Report entity - a user's complaint about another user or listing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{Restriction, Snowflake};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Pending,
    Reviewed,
    Resolved,
    Dismissed,
}

impl ReportStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Resolved => "resolved",
            Self::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            "resolved" => Ok(Self::Resolved),
            "dismissed" => Ok(Self::Dismissed),
            other => Err(DomainError::InvalidReportStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: Snowflake,
    pub reporter_id: Snowflake,
    pub reported_user_id: Snowflake,
    pub marketplace_item_id: Option<Snowflake>,
    pub reason: String,
    pub description: Option<String>,
    pub status: ReportStatus,
    pub admin_notes: Option<String>,
    pub resolved_by: Option<Snowflake>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(
        id: Snowflake,
        reporter_id: Snowflake,
        reported_user_id: Snowflake,
        reason: String,
    ) -> Result<Self, DomainError> {
        if reporter_id == reported_user_id {
            return Err(DomainError::CannotReportSelf);
        }
        let now = Utc::now();
        Ok(Self {
            id,
            reporter_id,
            reported_user_id,
            marketplace_item_id: None,
            reason,
            description: None,
            status: ReportStatus::Pending,
            admin_notes: None,
            resolved_by: None,
            resolved_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Record an admin decision. Any status change stamps the acting admin.
    pub fn review(
        &mut self,
        status: ReportStatus,
        admin_id: Snowflake,
        admin_notes: Option<String>,
        now: DateTime<Utc>,
    ) {
        self.status = status;
        if admin_notes.is_some() {
            self.admin_notes = admin_notes;
        }
        self.resolved_by = Some(admin_id);
        self.resolved_at = Some(now);
        self.updated_at = now;
    }

    /// Close the report because its subject was restricted
    pub fn resolve_with(&mut self, restriction: &Restriction) {
        self.review(
            ReportStatus::Resolved,
            restriction.restricted_by,
            Some(restriction.admin_note()),
            restriction.start_date,
        );
    }
}
