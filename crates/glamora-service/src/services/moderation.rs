//! Account restrictions issued from reports

use chrono::Utc;
use glamora_core::{DomainError, Restriction, RestrictionDuration, Snowflake};
use tracing::{info, instrument};

use crate::dto::{MessageResponse, RestrictUserRequest, RestrictionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Whitespace-only counts as absent. The value itself is returned as sent,
/// so `" 1 day "` still fails the exact duration match.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Restrict the user a report is about and resolve the report.
    ///
    /// Field presence is checked before the report lookup, and the report
    /// lookup before the duration is parsed. Both writes commit together.
    #[instrument(skip(self, request))]
    pub async fn restrict_from_report(
        &self,
        report_id: Snowflake,
        admin_id: Snowflake,
        request: RestrictUserRequest,
    ) -> ServiceResult<RestrictionResponse> {
        let (Some(duration), Some(reason)) = (
            non_blank(request.restriction_duration.as_deref()),
            non_blank(request.restriction_reason.as_deref()),
        ) else {
            return Err(DomainError::MissingRestrictionFields.into());
        };

        let mut report = self
            .ctx
            .report_repo()
            .find_by_id(report_id)
            .await?
            .ok_or(DomainError::ReportNotFound(report_id))?;

        let duration = RestrictionDuration::parse(duration)?;
        let restriction = Restriction::starting_at(Utc::now(), duration, reason, admin_id);
        report.resolve_with(&restriction);

        self.ctx
            .report_repo()
            .resolve_with_restriction(&report, &restriction)
            .await?;

        info!(
            report_id = %report_id,
            user_id = %report.reported_user_id,
            admin_id = %admin_id,
            duration = %duration,
            until = %restriction.end_date,
            "User restricted"
        );

        Ok(RestrictionResponse {
            message: "User account restricted successfully.".to_string(),
            restriction_end_date: restriction.end_date,
            restriction_duration: duration,
        })
    }

    /// Clear an active or lapsed restriction
    #[instrument(skip(self))]
    pub async fn lift_restriction(
        &self,
        user_id: Snowflake,
        admin_id: Snowflake,
    ) -> ServiceResult<MessageResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        user.lift_restriction();
        self.ctx.user_repo().update_account_status(&user).await?;

        info!(user_id = %user_id, admin_id = %admin_id, "Restriction lifted");
        Ok(MessageResponse::new("Restriction lifted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::error::ServiceError;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some(" 1 day ")), Some(" 1 day "));
        assert_eq!(non_blank(Some("  spam  ")), Some("  spam  "));
    }

    #[test]
    fn test_padded_duration_is_not_a_duration() {
        let duration = non_blank(Some(" 1 day ")).unwrap();
        let err = ServiceError::from(RestrictionDuration::parse(duration).unwrap_err());
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_RESTRICTION_DURATION");
    }
}
