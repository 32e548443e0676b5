//! # glamora-service
//!
//! Application layer: the moderation and restriction workflow, the admin
//! dashboard use cases, the small user-facing surface that feeds them, and
//! the request/response DTOs the HTTP layer speaks.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::*;
