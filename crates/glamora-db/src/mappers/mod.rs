//! Model to entity mappers
//!
//! Rows carrying enum columns convert with `TryFrom`, so a value the domain
//! does not know surfaces as a database error instead of a panic.

mod analytics;
mod marketplace_item;
mod outfit;
mod report;
mod user;
mod wardrobe;

pub use user::user_summary;

use glamora_core::DomainError;

/// A stored enum value the domain does not recognise
pub(crate) fn corrupt_column(column: &str, value: &str) -> DomainError {
    DomainError::DatabaseError(format!("unexpected value {value:?} in column {column}"))
}
