//! Platform settings edited from the admin dashboard

use glamora_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{SettingsDto, SettingsResponse, SettingsUpdatedResponse, UpdateSettingsRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct SettingsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SettingsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn get(&self) -> ServiceResult<SettingsResponse> {
        let settings = self.ctx.settings_repo().get().await?;
        Ok(SettingsResponse {
            settings: SettingsDto::from(settings),
        })
    }

    /// Apply the provided fields and persist them
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        admin_id: Snowflake,
        request: UpdateSettingsRequest,
    ) -> ServiceResult<SettingsUpdatedResponse> {
        let mut settings = self.ctx.settings_repo().get().await?;

        if let Some(threshold) = request.report_threshold {
            settings.set_report_threshold(threshold)?;
        }
        if let Some(guidelines) = request.community_guidelines {
            settings.community_guidelines = guidelines;
        }
        if let Some(enabled) = request.auto_moderation_enabled {
            settings.auto_moderation_enabled = enabled;
        }
        settings.touch(admin_id);

        self.ctx.settings_repo().update(&settings).await?;
        info!(admin_id = %admin_id, "Settings updated");

        Ok(SettingsUpdatedResponse {
            message: "Settings updated successfully".to_string(),
            settings: SettingsDto::from(settings),
        })
    }
}
