//! Report model -> entity mappers

use glamora_core::{DomainError, ItemSummary, Report, ReportDetails, Snowflake};

use super::{corrupt_column, user_summary};
use crate::models::{ReportDetailsModel, ReportModel};

impl TryFrom<ReportModel> for Report {
    type Error = DomainError;

    fn try_from(model: ReportModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse()
            .map_err(|_| corrupt_column("reports.status", &model.status))?;

        Ok(Report {
            id: Snowflake::new(model.id),
            reporter_id: Snowflake::new(model.reporter_id),
            reported_user_id: Snowflake::new(model.reported_user_id),
            marketplace_item_id: model.marketplace_item_id.map(Snowflake::new),
            reason: model.reason,
            description: model.description,
            status,
            admin_notes: model.admin_notes,
            resolved_by: model.resolved_by.map(Snowflake::new),
            resolved_at: model.resolved_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<ReportDetailsModel> for ReportDetails {
    type Error = DomainError;

    fn try_from(model: ReportDetailsModel) -> Result<Self, Self::Error> {
        let reporter = user_summary(model.report.reporter_id, model.reporter_name, model.reporter_email);
        let reported_user = user_summary(
            model.report.reported_user_id,
            model.reported_name,
            model.reported_email,
        );
        let marketplace_item = match (model.report.marketplace_item_id, model.item_name) {
            (Some(id), Some(name)) => Some(ItemSummary {
                id: Snowflake::new(id),
                name,
                description: model.item_description,
            }),
            _ => None,
        };

        Ok(ReportDetails {
            report: Report::try_from(model.report)?,
            reporter,
            reported_user,
            marketplace_item,
        })
    }
}
