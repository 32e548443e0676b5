//! Route handlers
//!
//! HTTP request handlers grouped by area.

pub mod admin;
pub mod admin_users;
pub mod auth;
pub mod health;
pub mod marketplace;
pub mod outfits;
pub mod reports;
pub mod usage;
pub mod users;
pub mod wardrobe;
