//! Test fixtures and data generators

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "IntegrationAdmin1";

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique within the process; combined with the pid for emails
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            email: format!("user{}-{suffix}@glamora.test", std::process::id()),
            password: "TestPass123".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub refresh_token: String,
    pub user: AuthUser,
}

#[derive(Debug, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportRequest {
    pub reported_user_id: String,
    pub reason: String,
}

impl SubmitReportRequest {
    pub fn against(user_id: &str) -> Self {
        Self {
            reported_user_id: user_id.to_string(),
            reason: "Inappropriate listing".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictRequest {
    pub restriction_duration: Option<String>,
    pub restriction_reason: Option<String>,
}

impl RestrictRequest {
    pub fn new(duration: &str) -> Self {
        Self {
            restriction_duration: Some(duration.to_string()),
            restriction_reason: Some("Repeated violations".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateWardrobeItemRequest {
    pub name: String,
    pub category: String,
}

impl CreateWardrobeItemRequest {
    pub fn unique(category: &str) -> Self {
        Self {
            name: format!("Item {}", unique_suffix()),
            category: category.to_string(),
        }
    }
}
