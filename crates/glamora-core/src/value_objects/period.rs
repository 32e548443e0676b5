//! Reporting windows used by analytics and usage statistics

use chrono::{DateTime, Duration, Months, Utc};
use std::fmt;

use crate::error::DomainError;

/// Lookback window for the admin analytics charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsPeriod {
    OneMonth,
    ThreeMonths,
    #[default]
    SixMonths,
    OneYear,
}

impl AnalyticsPeriod {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "1month" => Ok(Self::OneMonth),
            "3months" => Ok(Self::ThreeMonths),
            "6months" => Ok(Self::SixMonths),
            "1year" => Ok(Self::OneYear),
            other => Err(DomainError::InvalidPeriod(other.to_string())),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMonth => "1month",
            Self::ThreeMonths => "3months",
            Self::SixMonths => "6months",
            Self::OneYear => "1year",
        }
    }

    pub const fn months(self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
        }
    }

    /// Start of the window, the same calendar day `months()` months back
    pub fn since(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_months(Months::new(self.months()))
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl fmt::Display for AnalyticsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Window for the "most worn" statistics on the mobile client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsageRange {
    Week,
    #[default]
    Month,
    Year,
}

impl UsageRange {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(DomainError::InvalidRange(other.to_string())),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    pub fn since(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Week => now - Duration::days(7),
            Self::Month => now.checked_sub_months(Months::new(1)).unwrap_or(now),
            Self::Year => now.checked_sub_months(Months::new(12)).unwrap_or(now),
        }
    }
}

impl fmt::Display for UsageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
