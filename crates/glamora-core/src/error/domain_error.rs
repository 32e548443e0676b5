//! Domain errors - error types for the domain layer
//!
//! Display strings double as the `message` clients read, so they are kept
//! identical to what the mobile app and admin dashboard already show.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::value_objects::Snowflake;

#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found")]
    UserNotFound(Snowflake),

    #[error("Report not found.")]
    ReportNotFound(Snowflake),

    #[error("Item not found")]
    ItemNotFound(Snowflake),

    #[error("Wardrobe item not found")]
    WardrobeItemNotFound(Snowflake),

    #[error("Outfit not found")]
    OutfitNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("restrictionDuration and restrictionReason are required.")]
    MissingRestrictionFields,

    #[error("Invalid restriction duration.")]
    InvalidRestrictionDuration,

    #[error("Invalid report status: {0}")]
    InvalidReportStatus(String),

    #[error("Invalid item status: {0}")]
    InvalidItemStatus(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("You cannot report yourself")]
    CannotReportSelf,

    #[error("Report threshold must be at least 1")]
    InvalidReportThreshold,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Admin access required")]
    AdminRequired,

    #[error("Your account is restricted until {until}")]
    AccountRestricted { until: DateTime<Utc> },

    #[error("Your account has been deactivated")]
    AccountDeactivated,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ReportNotFound(_) => "UNKNOWN_REPORT",
            Self::ItemNotFound(_) => "UNKNOWN_ITEM",
            Self::WardrobeItemNotFound(_) => "UNKNOWN_WARDROBE_ITEM",
            Self::OutfitNotFound(_) => "UNKNOWN_OUTFIT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::MissingRestrictionFields => "MISSING_RESTRICTION_FIELDS",
            Self::InvalidRestrictionDuration => "INVALID_RESTRICTION_DURATION",
            Self::InvalidReportStatus(_) => "INVALID_REPORT_STATUS",
            Self::InvalidItemStatus(_) => "INVALID_ITEM_STATUS",
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::InvalidPeriod(_) => "INVALID_PERIOD",
            Self::InvalidRange(_) => "INVALID_RANGE",
            Self::CannotReportSelf => "CANNOT_REPORT_SELF",
            Self::InvalidReportThreshold => "INVALID_REPORT_THRESHOLD",

            // Authorization
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::AccountRestricted { .. } => "ACCOUNT_RESTRICTED",
            Self::AccountDeactivated => "ACCOUNT_DEACTIVATED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ReportNotFound(_)
                | Self::ItemNotFound(_)
                | Self::WardrobeItemNotFound(_)
                | Self::OutfitNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::WeakPassword(_)
                | Self::MissingRestrictionFields
                | Self::InvalidRestrictionDuration
                | Self::InvalidReportStatus(_)
                | Self::InvalidItemStatus(_)
                | Self::InvalidRole(_)
                | Self::InvalidPeriod(_)
                | Self::InvalidRange(_)
                | Self::CannotReportSelf
                | Self::InvalidReportThreshold
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AdminRequired | Self::AccountRestricted { .. } | Self::AccountDeactivated
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }
}
