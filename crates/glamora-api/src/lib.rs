//! # glamora-api
//!
//! REST API server built with Axum: the admin dashboard endpoints and the
//! user-facing wardrobe, marketplace and reporting endpoints.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
