//! Request DTOs for API endpoints
//!
//! Bodies are camelCase JSON, the shape the mobile app and the admin
//! dashboard already send. Query-string filters accept `all` for "no filter".

use chrono::{DateTime, Utc};
use glamora_core::{DomainError, Snowflake};
use serde::Deserialize;
use std::str::FromStr;
use validator::Validate;

// ============================================================================
// Pagination and filters
// ============================================================================

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page-number pagination, already clamped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// `page` is at least 1; `limit` defaults to 10 and is clamped to 1..=100
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Parse an optional filter where absent, empty and `all` all mean "any"
pub fn parse_filter<T>(value: Option<&str>) -> Result<Option<T>, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    match value.map(str::trim) {
        None | Some("" | "all") => Ok(None),
        Some(raw) => raw.parse().map(Some),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    /// `active` or `inactive`
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemListQuery {
    pub status: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub period: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageRangeQuery {
    pub range: Option<String>,
}

// ============================================================================
// Auth Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout with a refresh token ends that session; without one, every session
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Admin Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateUserRequest {
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportRequest {
    pub status: String,

    #[validate(length(max = 2000, message = "Admin notes must be at most 2000 characters"))]
    pub admin_notes: Option<String>,
}

/// Both fields are optional at the wire level so a missing one produces
/// the dedicated "required" message instead of a deserialization error
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestrictUserRequest {
    pub restriction_duration: Option<String>,

    #[validate(length(max = 1000, message = "Reason must be at most 1000 characters"))]
    pub restriction_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RejectItemRequest {
    #[validate(length(max = 1000, message = "Reason must be at most 1000 characters"))]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[validate(length(min = 1, max = 20000, message = "Guidelines must be 1-20000 characters"))]
    pub community_guidelines: Option<String>,

    pub auto_moderation_enabled: Option<bool>,

    pub report_threshold: Option<i32>,
}

// ============================================================================
// User-facing Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(url(message = "Profile picture must be a URL"))]
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportRequest {
    pub reported_user_id: Snowflake,

    pub marketplace_item_id: Option<Snowflake>,

    #[validate(length(min = 1, max = 500, message = "Reason must be 1-500 characters"))]
    pub reason: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWardrobeItemRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: String,

    pub subcategory: Option<String>,

    pub color: Option<String>,

    pub image_url: Option<String>,
}

/// Only the id is trusted; name, image and category are copied from the
/// caller's own wardrobe item
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitItemRequest {
    pub wardrobe_item_id: Snowflake,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutfitRequest {
    #[validate(length(min = 1, max = 200, message = "Outfit name must be 1-200 characters"))]
    pub outfit_name: String,

    #[validate(length(min = 1, max = 20, message = "An outfit needs 1-20 items"))]
    pub outfit_items: Vec<OutfitItemRequest>,

    pub occasion: Option<String>,

    pub weather: Option<String>,

    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,

    pub worn_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFavoriteRequest {
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackUsageRequest {
    pub outfit_id: Snowflake,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glamora_core::{ReportStatus, UserRole};

    #[test]
    fn test_page_request_defaults_and_clamps() {
        assert_eq!(PageRequest::default(), PageRequest { page: 1, limit: 10 });
        assert_eq!(PageRequest::new(Some(0), Some(500)), PageRequest { page: 1, limit: 100 });
        assert_eq!(PageRequest::new(Some(-3), Some(0)).limit, 1);
        assert_eq!(PageRequest::new(Some(3), Some(20)).offset(), 40);
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter::<ReportStatus>(None).unwrap(), None);
        assert_eq!(parse_filter::<ReportStatus>(Some("all")).unwrap(), None);
        assert_eq!(parse_filter::<ReportStatus>(Some("")).unwrap(), None);
        assert_eq!(
            parse_filter::<ReportStatus>(Some("resolved")).unwrap(),
            Some(ReportStatus::Resolved)
        );
        assert_eq!(parse_filter::<UserRole>(Some("admin")).unwrap(), Some(UserRole::Admin));
        assert!(parse_filter::<ReportStatus>(Some("closed")).is_err());
    }

    #[test]
    fn test_restrict_request_accepts_missing_fields() {
        let req: RestrictUserRequest = serde_json::from_str("{}").unwrap();
        assert!(req.restriction_duration.is_none());

        let req: RestrictUserRequest = serde_json::from_str(
            r#"{"restrictionDuration":"10 days","restrictionReason":"spam"}"#,
        )
        .unwrap();
        assert_eq!(req.restriction_duration.as_deref(), Some("10 days"));
        assert_eq!(req.restriction_reason.as_deref(), Some("spam"));
    }

    #[test]
    fn test_register_validation() {
        let valid = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "Password123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            password: "short".to_string(),
            ..valid
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_create_outfit_from_client_payload() {
        // The mobile client sends display fields too; they are ignored
        let req: CreateOutfitRequest = serde_json::from_str(
            r#"{
                "outfitName": "Casual Friday",
                "outfitItems": [
                    {"wardrobeItemId": "101", "itemName": "Shirt", "itemCategory": "tops"},
                    {"wardrobeItemId": 102}
                ],
                "occasion": "work",
                "notes": "Generated outfit combination"
            }"#,
        )
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.outfit_items[0].wardrobe_item_id, Snowflake::new(101));
        assert_eq!(req.outfit_items[1].wardrobe_item_id, Snowflake::new(102));
        assert!(req.worn_date.is_none());
    }

    #[test]
    fn test_create_outfit_requires_items() {
        let req = CreateOutfitRequest {
            outfit_name: "Empty".to_string(),
            outfit_items: Vec::new(),
            occasion: None,
            weather: None,
            notes: None,
            worn_date: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_listing_price_must_not_be_negative() {
        let req = CreateListingRequest {
            name: "Boots".to_string(),
            description: None,
            category: "shoes".to_string(),
            price: -1.0,
            image_url: None,
        };
        assert!(req.validate().is_err());
    }
}
