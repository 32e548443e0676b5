//! Aggregate row mappers

use glamora_core::{CategoryCount, DashboardMetrics, MonthlyCount};

use crate::models::{CategoryCountModel, MetricsModel, MonthlyCountModel};

impl From<MetricsModel> for DashboardMetrics {
    fn from(model: MetricsModel) -> Self {
        DashboardMetrics {
            total_users: model.total_users,
            active_users: model.active_users,
            total_reports: model.total_reports,
            active_listings: model.active_listings,
            pending_posts: model.pending_posts,
        }
    }
}

impl From<MonthlyCountModel> for MonthlyCount {
    fn from(model: MonthlyCountModel) -> Self {
        MonthlyCount {
            year: model.year,
            month: u32::try_from(model.month).unwrap_or_default(),
            count: model.count,
        }
    }
}

impl From<CategoryCountModel> for CategoryCount {
    fn from(model: CategoryCountModel) -> Self {
        CategoryCount {
            category: model.category,
            count: model.count,
        }
    }
}
