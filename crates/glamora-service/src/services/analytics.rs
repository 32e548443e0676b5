//! Dashboard counters and charts

use chrono::Utc;
use glamora_core::{AnalyticsPeriod, MonthlyCount};
use tracing::{debug, instrument};

use crate::dto::{
    AnalyticsQuery, AnalyticsResponse, CategoryCountResponse, MetricsResponse,
    MonthlyCountResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

const TOP_CATEGORIES: i64 = 10;

/// Absent or empty means the six month default
fn parse_period(period: Option<&str>) -> ServiceResult<AnalyticsPeriod> {
    match period.map(str::trim) {
        None | Some("") => Ok(AnalyticsPeriod::default()),
        Some(raw) => Ok(AnalyticsPeriod::parse(raw)?),
    }
}

fn series(points: Vec<MonthlyCount>) -> Vec<MonthlyCountResponse> {
    points.into_iter().map(MonthlyCountResponse::from).collect()
}

pub struct AnalyticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn metrics(&self) -> ServiceResult<MetricsResponse> {
        Ok(self.ctx.analytics_repo().metrics().await?.into())
    }

    #[instrument(skip(self))]
    pub async fn analytics(&self, query: AnalyticsQuery) -> ServiceResult<AnalyticsResponse> {
        let period = parse_period(query.period.as_deref())?;
        let since = period.since(Utc::now());
        debug!(%period, %since, "Building analytics");

        let repo = self.ctx.analytics_repo();

        Ok(AnalyticsResponse {
            user_registrations: series(repo.user_registrations(since).await?),
            marketplace_activity: series(repo.marketplace_activity(since).await?),
            reports_over_time: series(repo.reports_over_time(since).await?),
            top_categories: repo
                .top_categories(TOP_CATEGORIES)
                .await?
                .into_iter()
                .map(CategoryCountResponse::from)
                .collect(),
            period: period.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period() {
        assert_eq!(parse_period(None).unwrap(), AnalyticsPeriod::SixMonths);
        assert_eq!(parse_period(Some("")).unwrap(), AnalyticsPeriod::SixMonths);
        assert_eq!(parse_period(Some("3months")).unwrap(), AnalyticsPeriod::ThreeMonths);

        let err = parse_period(Some("forever")).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
