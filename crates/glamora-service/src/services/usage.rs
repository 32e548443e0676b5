//! Clothing usage tracking and "most worn" statistics

use chrono::Utc;
use glamora_core::{Snowflake, UsageRange, UsageRecord};
use tracing::{info, instrument};

use crate::dto::{
    group_usage_by_category, FrequentUsageResponse, TrackUsageRequest, TrackUsageResponse,
    UsageRangeQuery,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::outfit::OutfitService;

pub struct UsageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UsageService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record one wear for every item of the outfit
    #[instrument(skip(self, request), fields(outfit_id = %request.outfit_id))]
    pub async fn track(
        &self,
        user_id: Snowflake,
        request: TrackUsageRequest,
    ) -> ServiceResult<TrackUsageResponse> {
        let outfit = OutfitService::new(self.ctx)
            .find_owned(user_id, request.outfit_id)
            .await?;

        let worn_at = Utc::now();
        let records: Vec<UsageRecord> = outfit
            .wardrobe_item_ids()
            .map(|wardrobe_item_id| UsageRecord {
                id: self.ctx.generate_id(),
                user_id,
                wardrobe_item_id,
                outfit_id: outfit.id,
                worn_at,
            })
            .collect();

        self.ctx.usage_repo().record_many(&records).await?;
        info!(user_id = %user_id, tracked = records.len(), "Usage tracked");

        Ok(TrackUsageResponse {
            message: "Usage tracked successfully".to_string(),
            tracked: records.len(),
        })
    }

    #[instrument(skip(self))]
    pub async fn frequent(
        &self,
        user_id: Snowflake,
        query: UsageRangeQuery,
    ) -> ServiceResult<FrequentUsageResponse> {
        let range = match query.range.as_deref().map(str::trim) {
            None | Some("") => UsageRange::default(),
            Some(raw) => UsageRange::parse(raw)?,
        };

        let usage = self
            .ctx
            .usage_repo()
            .frequent(user_id, range.since(Utc::now()))
            .await?;

        Ok(FrequentUsageResponse {
            range: range.to_string(),
            categories: group_usage_by_category(usage),
        })
    }
}
