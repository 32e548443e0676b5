//! Value objects - immutable types with semantic meaning

mod period;
mod restriction;
mod snowflake;

pub use period::{AnalyticsPeriod, UsageRange};
pub use restriction::{AccountStatus, Restriction, RestrictionDuration};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
