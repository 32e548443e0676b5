//! Integration test utilities for the Glamora API
//!
//! Spawns the real router against PostgreSQL and Redis and drives it over
//! HTTP with `reqwest`.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
