//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{DateTime, Duration, Utc};
use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

fn timestamp(value: &Value) -> DateTime<Utc> {
    value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&Utc))
        .expect("RFC 3339 timestamp")
}

/// A reporter, the user they report, and the report id
async fn reported_user(server: &TestServer) -> (AuthResponse, AuthResponse, String) {
    let reporter = server.register_user().await.unwrap();
    let target = server.register_user().await.unwrap();

    let response = server
        .post_auth(
            "/api/reports",
            &reporter.token,
            &SubmitReportRequest::against(&target.user.id),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let report_id = body["report"]["id"].as_str().unwrap().to_string();

    (reporter, target, report_id)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "user");

    let login = json!({ "email": request.email, "password": request.password });
    let response = server.post("/api/auth/login", &login).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.message, "Login successful");
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/auth/register", &request).await.unwrap();
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_refresh_rotates_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = server.register_user().await.unwrap();
    let body = json!({ "refreshToken": auth.refresh_token });

    let response = server.post("/api/auth/refresh", &body).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_ne!(refreshed.refresh_token, auth.refresh_token);

    // The old refresh token was revoked by the rotation
    let response = server.post("/api/auth/refresh", &body).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = server.register_user().await.unwrap();

    let response = server
        .post_auth("/api/auth/logout", &auth.token, &json!({ "refreshToken": auth.refresh_token }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post("/api/auth/refresh", &json!({ "refreshToken": auth.refresh_token }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    assert_eq!(admin.message, "Login successful");
    assert_eq!(admin.user.role, "admin");

    let wrong = json!({ "username": ADMIN_USERNAME, "password": "admin123" });
    let response = server.post("/api/admin/login", &wrong).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

// ============================================================================
// Admin Guard Tests
// ============================================================================

#[tokio::test]
async fn test_admin_routes_reject_missing_and_invalid_tokens() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/admin/metrics").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/api/admin/metrics", "not-a-jwt").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_routes_forbid_regular_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.register_user().await.unwrap();

    for path in ["/api/admin/metrics", "/api/admin/users", "/api/admin/reports"] {
        let response = server.get_auth(path, &user.token).await.unwrap();
        let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
        assert_eq!(code, "ADMIN_REQUIRED", "{path}");
    }
}

// ============================================================================
// Restriction Tests
// ============================================================================

#[tokio::test]
async fn test_restrict_from_report() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    let (_, target, report_id) = reported_user(&server).await;

    let before = Utc::now();
    let response = server
        .put_auth(
            &format!("/api/admin/reports/{report_id}/restrict"),
            &admin.token,
            &RestrictRequest::new("10 days"),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["message"], "User account restricted successfully.");
    assert_eq!(body["restrictionDuration"], "10 days");
    let end = timestamp(&body["restrictionEndDate"]);
    let offset = end - before;
    assert!(offset >= Duration::days(10) && offset < Duration::days(10) + Duration::minutes(1));

    // The report is resolved by the acting admin
    let response = server
        .get_auth("/api/admin/reports?status=resolved&limit=100", &admin.token)
        .await
        .unwrap();
    let list: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let report = list["reports"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == report_id.as_str())
        .expect("resolved report listed");
    assert_eq!(report["status"], "resolved");
    assert_eq!(report["resolvedBy"], admin.user.id.as_str());
    assert!(report["resolvedAt"].is_string());

    // The user carries the restriction and who issued it
    let response = server
        .get_auth(&format!("/api/admin/users/{}", target.user.id), &admin.token)
        .await
        .unwrap();
    let detail: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let status = &detail["user"]["accountStatus"];
    assert_eq!(status["isRestricted"], true);
    assert_eq!(status["restrictedBy"], admin.user.id.as_str());
    assert_eq!(status["restrictionReason"], "Repeated violations");
}

#[tokio::test]
async fn test_restrict_rejects_bad_input() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    let (_, _, report_id) = reported_user(&server).await;
    let path = format!("/api/admin/reports/{report_id}/restrict");

    let response = server
        .put_auth(&path, &admin.token, &RestrictRequest::new("2 weeks"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_RESTRICTION_DURATION");

    // Durations are exact literals; padding does not count as a match
    let response = server
        .put_auth(&path, &admin.token, &RestrictRequest::new(" 1 day "))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_RESTRICTION_DURATION");

    let missing = RestrictRequest {
        restriction_duration: Some("1 day".to_string()),
        restriction_reason: None,
    };
    let response = server.put_auth(&path, &admin.token, &missing).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "MISSING_RESTRICTION_FIELDS");

    let response = server
        .put_auth(
            "/api/admin/reports/1/restrict",
            &admin.token,
            &RestrictRequest::new("1 day"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_restricted_user_cannot_write_until_lifted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    let (_, target, report_id) = reported_user(&server).await;

    let response = server
        .put_auth(
            &format!("/api/admin/reports/{report_id}/restrict"),
            &admin.token,
            &RestrictRequest::new("1 day"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let item = CreateWardrobeItemRequest::unique("Tops");
    let response = server
        .post_auth("/api/wardrobe/items", &target.token, &item)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["code"], "ACCOUNT_RESTRICTED");
    assert!(body["details"]["restrictionEndDate"].is_string());

    // Reads still work
    let response = server.get_auth("/api/wardrobe/items", &target.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/admin/users/{}/restriction", target.user.id),
            &admin.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth("/api/wardrobe/items", &target.token, &item)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

// ============================================================================
// Report Review Tests
// ============================================================================

#[tokio::test]
async fn test_update_report_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    let (_, _, report_id) = reported_user(&server).await;
    let path = format!("/api/admin/reports/{report_id}");

    let response = server
        .put_auth(&path, &admin.token, &json!({ "status": "resolved", "adminNotes": "Handled" }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["report"]["status"], "resolved");
    assert_eq!(body["report"]["adminNotes"], "Handled");
    assert!(body["report"]["resolvedAt"].is_string());

    let response = server
        .put_auth(&path, &admin.token, &json!({ "status": "closed" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Marketplace Moderation Tests
// ============================================================================

async fn pending_listing(server: &TestServer, owner: &AuthResponse) -> String {
    let listing = json!({ "name": "Denim jacket", "category": "Outerwear", "price": 25.0 });
    let response = server
        .post_auth("/api/marketplace/items", &owner.token, &listing)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body["item"]["status"], "pending");
    body["item"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_approve_stamps_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    let owner = server.register_user().await.unwrap();
    let item_id = pending_listing(&server, &owner).await;

    let response = server
        .put_auth(&format!("/api/admin/marketplace/{item_id}/approve"), &admin.token, &json!({}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["message"], "Item approved successfully");
    assert_eq!(body["item"]["status"], "approved");
    assert_eq!(body["item"]["approvedBy"], admin.user.id.as_str());
    assert!(body["item"]["approvedAt"].is_string());
    assert!(body["item"]["rejectedBy"].is_null());
}

#[tokio::test]
async fn test_reject_stamps_admin_and_reason() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    let owner = server.register_user().await.unwrap();
    let item_id = pending_listing(&server, &owner).await;

    let response = server
        .put_auth(
            &format!("/api/admin/marketplace/{item_id}/reject"),
            &admin.token,
            &json!({ "reason": "Blurry photo" }),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["item"]["status"], "rejected");
    assert_eq!(body["item"]["rejectedBy"], admin.user.id.as_str());
    assert_eq!(body["item"]["rejectionReason"], "Blurry photo");
    assert!(body["item"]["approvedBy"].is_null());
}

// ============================================================================
// Admin User Listing Tests
// ============================================================================

#[tokio::test]
async fn test_user_listing_hides_hashes_and_admins() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    let user = server.register_user().await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/admin/users?search={}&limit=5", user.user.email),
            &admin.token,
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], user.user.id.as_str());
    assert!(users[0].get("password").is_none());
    assert!(users[0].get("passwordHash").is_none());
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["totalPages"], 1);

    // Admin accounts are outside the base role filter
    let response = server
        .get_auth(
            &format!("/api/admin/users?search={}", admin.user.email),
            &admin.token,
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_deactivated_user_loses_access() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    let user = server.register_user().await.unwrap();

    let response = server
        .delete_auth(&format!("/api/admin/users/{}", user.user.id), &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post("/api/auth/refresh", &json!({ "refreshToken": user.refresh_token }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_auth("/api/wardrobe/items", &user.token, &CreateWardrobeItemRequest::unique("Tops"))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Dashboard Tests
// ============================================================================

#[tokio::test]
async fn test_metrics_and_analytics() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();
    server.register_user().await.unwrap();

    let response = server.get_auth("/api/admin/metrics", &admin.token).await.unwrap();
    let metrics: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(metrics["totalUsers"].as_i64().unwrap() >= 1);

    let response = server
        .get_auth("/api/admin/analytics?period=3months", &admin.token)
        .await
        .unwrap();
    let analytics: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(analytics["period"], "3months");
    assert!(analytics["userRegistrations"].as_array().unwrap().len() >= 1);

    let response = server
        .get_auth("/api/admin/analytics?period=forever", &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_settings_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin_login().await.unwrap();

    let response = server
        .put_auth("/api/admin/settings", &admin.token, &json!({ "reportThreshold": 0 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .put_auth("/api/admin/settings", &admin.token, &json!({ "reportThreshold": 4 }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["settings"]["reportThreshold"], 4);
    assert_eq!(body["settings"]["updatedBy"], admin.user.id.as_str());

    let response = server.get_auth("/api/admin/settings", &admin.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["settings"]["maxFileSize"], "10MB");
}

// ============================================================================
// Wardrobe, Outfit and Usage Tests
// ============================================================================

#[tokio::test]
async fn test_outfit_usage_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.register_user().await.unwrap();
    let other = server.register_user().await.unwrap();

    let response = server
        .post_auth("/api/wardrobe/items", &user.token, &CreateWardrobeItemRequest::unique("Shoes"))
        .await
        .unwrap();
    let item: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let item_id = item["id"].as_str().unwrap();

    let outfit = json!({
        "outfitName": "Weekend",
        "outfitItems": [{ "wardrobeItemId": item_id }],
    });
    let response = server.post_auth("/api/outfits", &user.token, &outfit).await.unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let outfit_id = body["outfit"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["outfit"]["outfitItems"][0]["itemCategory"], "Shoes");

    // Another user's wardrobe item cannot be borrowed
    let response = server.post_auth("/api/outfits", &other.token, &outfit).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Nor can another user's outfit be touched
    let response = server
        .delete_auth(&format!("/api/outfits/{outfit_id}"), &other.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    for _ in 0..2 {
        let response = server
            .post_auth("/api/clothing-usage/track", &user.token, &json!({ "outfitId": outfit_id }))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get_auth("/api/clothing-usage/frequent?range=week", &user.token)
        .await
        .unwrap();
    let usage: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let first = &usage["categories"][0];
    assert_eq!(first["category"], "Shoes");
    assert_eq!(first["items"][0]["usageCount"], 2);
    assert_eq!(first["items"][0]["maxUsage"], 2);

    let response = server
        .put_auth(
            &format!("/api/outfits/{outfit_id}/favorite"),
            &user.token,
            &json!({ "isFavorite": true }),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["outfit"]["isFavorite"], true);

    let response = server
        .delete_auth(&format!("/api/outfits/{outfit_id}"), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_profile_update() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.register_user().await.unwrap();
    let other = server.register_user().await.unwrap();

    let response = server
        .put_auth("/api/users/me", &user.token, &json!({ "name": "Renamed" }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["name"], "Renamed");

    let response = server
        .put_auth("/api/users/me", &user.token, &json!({ "email": other.user.email }))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server.get_auth("/api/users/me", &user.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["email"], user.user.email.as_str());
}
