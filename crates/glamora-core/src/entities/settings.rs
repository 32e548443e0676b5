//! System-wide moderation settings (single row)

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

pub const DEFAULT_GUIDELINES: &str = "Welcome to Glamora! Please follow these guidelines...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSettings {
    pub community_guidelines: String,
    pub max_file_size_mb: i32,
    pub allowed_file_types: Vec<String>,
    pub auto_moderation_enabled: bool,
    pub report_threshold: i32,
    pub updated_by: Option<Snowflake>,
    pub updated_at: DateTime<Utc>,
}

impl SystemSettings {
    pub fn set_report_threshold(&mut self, threshold: i32) -> Result<(), DomainError> {
        if threshold < 1 {
            return Err(DomainError::InvalidReportThreshold);
        }
        self.report_threshold = threshold;
        Ok(())
    }

    pub fn touch(&mut self, admin_id: Snowflake) {
        self.updated_by = Some(admin_id);
        self.updated_at = Utc::now();
    }
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            community_guidelines: DEFAULT_GUIDELINES.to_string(),
            max_file_size_mb: 10,
            allowed_file_types: ["jpg", "jpeg", "png", "gif"]
                .into_iter()
                .map(String::from)
                .collect(),
            auto_moderation_enabled: true,
            report_threshold: 3,
            updated_by: None,
            updated_at: Utc::now(),
        }
    }
}
