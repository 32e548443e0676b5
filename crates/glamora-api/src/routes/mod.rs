//! Route definitions
//!
//! Admin dashboard routes under `/api/admin`, user-facing routes under
//! `/api`, and health probes at the root.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{
    admin, admin_users, auth, health, marketplace, outfits, reports, usage, users, wardrobe,
};
use crate::state::AppState;

/// The API router, without health probes so they can skip rate limiting
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin", admin_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(report_routes())
        .merge(marketplace_routes())
        .merge(wardrobe_routes())
}

/// Dashboard routes; everything but login and refresh requires an admin token
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::admin_login))
        .route("/refresh", post(auth::admin_refresh))
        .route("/metrics", get(admin::metrics))
        .route("/analytics", get(admin::analytics))
        .route(
            "/settings",
            get(admin::get_settings).put(admin::update_settings),
        )
        // Users
        .route("/users", get(admin_users::list_users))
        .route(
            "/users/:id",
            get(admin_users::get_user)
                .put(admin_users::update_user)
                .delete(admin_users::deactivate_user),
        )
        .route("/users/:id/restriction", delete(admin_users::lift_restriction))
        // Reports
        .route("/reports", get(reports::list_reports))
        .route("/reports/:id", put(reports::update_report))
        .route("/reports/:id/restrict", put(reports::restrict_user))
        // Marketplace moderation
        .route("/marketplace/pending", get(marketplace::list_pending))
        .route("/marketplace/categories", get(marketplace::list_categories))
        .route("/marketplace/items", get(marketplace::list_items))
        .route("/marketplace/:id/approve", put(marketplace::approve_item))
        .route("/marketplace/:id/reject", put(marketplace::reject_item))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users/me",
        get(users::get_current_user).put(users::update_current_user),
    )
}

fn report_routes() -> Router<AppState> {
    Router::new().route("/reports", post(reports::submit_report))
}

fn marketplace_routes() -> Router<AppState> {
    Router::new()
        .route("/marketplace/items", post(marketplace::create_listing))
        .route("/marketplace/items/mine", get(marketplace::my_listings))
}

/// Wardrobe, outfits and clothing usage
fn wardrobe_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/wardrobe/items",
            get(wardrobe::list_items).post(wardrobe::create_item),
        )
        .route(
            "/outfits",
            get(outfits::list_outfits).post(outfits::create_outfit),
        )
        .route("/outfits/:id", delete(outfits::delete_outfit))
        .route("/outfits/:id/favorite", put(outfits::set_favorite))
        .route("/clothing-usage/track", post(usage::track_usage))
        .route("/clothing-usage/frequent", get(usage::frequent_usage))
}
