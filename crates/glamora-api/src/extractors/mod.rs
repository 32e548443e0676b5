//! Axum extractors for request handling
//!
//! Authentication, body validation, pagination and path ids.

mod auth;
mod pagination;
mod path;
mod query;
mod validated;

pub use auth::{ActiveUser, AdminUser, AuthUser};
pub use pagination::{Pagination, PaginationParams};
pub use path::IdPath;
pub use query::QueryParams;
pub use validated::{JsonBody, OptionalJson, OptionalValidatedJson, ValidatedJson};
