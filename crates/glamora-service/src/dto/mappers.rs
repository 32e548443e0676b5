//! Entity to DTO mappers

use glamora_core::{
    CategoryCount, DashboardMetrics, ItemSummary, ItemUsage, ListingWithOwner, MarketplaceItem,
    MonthlyCount, Outfit, Report, ReportDetails, SystemSettings, User, UserSummary, WardrobeItem,
};

use super::responses::{
    AuthUserResponse, CategoryCountResponse, CategoryUsageResponse, ItemSummaryResponse,
    MarketplaceItemResponse, MetricsResponse, MonthlyCountResponse, OutfitResponse, Populated,
    ReportResponse, SettingsDto, UsageItemResponse, UserResponse, UserSummaryResponse,
    WardrobeItemResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            is_active: user.is_active,
            status: if user.is_active { "active" } else { "inactive" },
            profile_picture: user.profile_picture.clone(),
            account_status: user.account_status.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for AuthUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            email: summary.email,
        }
    }
}

impl From<ItemSummary> for ItemSummaryResponse {
    fn from(summary: ItemSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            description: summary.description,
        }
    }
}

fn populate<S, T: From<S>>(id: glamora_core::Snowflake, joined: Option<S>) -> Populated<T> {
    joined.map_or(Populated::Id(id), |record| Populated::Record(T::from(record)))
}

// ============================================================================
// Report Mappers
// ============================================================================

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            reporter_id: Populated::Id(report.reporter_id),
            reported_user_id: Populated::Id(report.reported_user_id),
            marketplace_item_id: report.marketplace_item_id.map(Populated::Id),
            reason: report.reason,
            description: report.description,
            status: report.status,
            admin_notes: report.admin_notes,
            resolved_by: report.resolved_by,
            resolved_at: report.resolved_at,
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}

impl From<ReportDetails> for ReportResponse {
    fn from(details: ReportDetails) -> Self {
        let ReportDetails {
            report,
            reporter,
            reported_user,
            marketplace_item,
        } = details;

        let reporter_id = populate(report.reporter_id, reporter);
        let reported_user_id = populate(report.reported_user_id, reported_user);
        let marketplace_item_id = report
            .marketplace_item_id
            .map(|id| populate(id, marketplace_item));

        Self {
            reporter_id,
            reported_user_id,
            marketplace_item_id,
            ..Self::from(report)
        }
    }
}

// ============================================================================
// Marketplace Mappers
// ============================================================================

impl From<MarketplaceItem> for MarketplaceItemResponse {
    fn from(item: MarketplaceItem) -> Self {
        Self {
            id: item.id,
            user_id: Populated::Id(item.user_id),
            name: item.name,
            description: item.description,
            category: item.category,
            price: item.price,
            image_url: item.image_url,
            status: item.status,
            approved_by: item.approved_by,
            approved_at: item.approved_at,
            rejection_reason: item.rejection_reason,
            rejected_by: item.rejected_by,
            rejected_at: item.rejected_at,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<ListingWithOwner> for MarketplaceItemResponse {
    fn from(listing: ListingWithOwner) -> Self {
        let user_id = populate(listing.item.user_id, listing.owner);
        Self {
            user_id,
            ..Self::from(listing.item)
        }
    }
}

// ============================================================================
// Dashboard Mappers
// ============================================================================

impl From<DashboardMetrics> for MetricsResponse {
    fn from(metrics: DashboardMetrics) -> Self {
        Self {
            total_users: metrics.total_users,
            active_users: metrics.active_users,
            total_reports: metrics.total_reports,
            active_listings: metrics.active_listings,
            pending_posts: metrics.pending_posts,
        }
    }
}

impl From<MonthlyCount> for MonthlyCountResponse {
    fn from(point: MonthlyCount) -> Self {
        Self {
            year: point.year,
            month: point.month,
            count: point.count,
        }
    }
}

impl From<CategoryCount> for CategoryCountResponse {
    fn from(entry: CategoryCount) -> Self {
        Self {
            category: entry.category,
            count: entry.count,
        }
    }
}

impl From<SystemSettings> for SettingsDto {
    fn from(settings: SystemSettings) -> Self {
        Self {
            max_file_size: format!("{}MB", settings.max_file_size_mb),
            community_guidelines: settings.community_guidelines,
            max_file_size_mb: settings.max_file_size_mb,
            allowed_file_types: settings.allowed_file_types,
            auto_moderation_enabled: settings.auto_moderation_enabled,
            report_threshold: settings.report_threshold,
            updated_by: settings.updated_by,
            updated_at: settings.updated_at,
        }
    }
}

// ============================================================================
// Wardrobe Mappers
// ============================================================================

impl From<WardrobeItem> for WardrobeItemResponse {
    fn from(item: WardrobeItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            subcategory: item.subcategory,
            color: item.color,
            image_url: item.image_url,
            created_at: item.created_at,
        }
    }
}

impl From<Outfit> for OutfitResponse {
    fn from(outfit: Outfit) -> Self {
        Self {
            id: outfit.id,
            outfit_name: outfit.name,
            outfit_items: outfit.items,
            occasion: outfit.occasion,
            weather: outfit.weather,
            notes: outfit.notes,
            is_favorite: outfit.is_favorite,
            worn_date: outfit.worn_date,
            created_at: outfit.created_at,
        }
    }
}

/// Group most-worn-first usage rows by category.
///
/// Categories keep the order of their most worn item. Every entry carries
/// the overall maximum so the client can scale its bars.
pub fn group_usage_by_category(usage: Vec<ItemUsage>) -> Vec<CategoryUsageResponse> {
    let max_usage = usage.iter().map(|u| u.usage_count).max().unwrap_or(0);
    let mut groups: Vec<CategoryUsageResponse> = Vec::new();

    for entry in usage {
        let item = UsageItemResponse {
            id: entry.wardrobe_item_id,
            name: entry.name,
            category: entry.category.clone(),
            usage_count: entry.usage_count,
            max_usage,
        };
        match groups.iter_mut().find(|g| g.category == entry.category) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryUsageResponse {
                category: entry.category,
                items: vec![item],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use glamora_core::{RestrictionDuration, Restriction, Snowflake};
    use chrono::Utc;

    #[test]
    fn test_user_response_hides_nothing_sensitive() {
        let mut user = User::new(Snowflake::new(1), "Ann".into(), "ann@example.com".into());
        user.deactivate();

        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();
        assert_eq!(json["status"], "inactive");
        assert_eq!(json["isActive"], false);
        assert_eq!(json["accountStatus"]["isRestricted"], false);
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn test_report_details_are_populated() {
        let report = Report::new(Snowflake::new(10), Snowflake::new(1), Snowflake::new(2), "spam".into())
            .unwrap();
        let details = ReportDetails {
            report,
            reporter: Some(UserSummary {
                id: Snowflake::new(1),
                name: "Reporter".into(),
                email: "r@example.com".into(),
            }),
            reported_user: None,
            marketplace_item: None,
        };

        let json = serde_json::to_value(ReportResponse::from(details)).unwrap();
        assert_eq!(json["reporterId"]["name"], "Reporter");
        // Missing join falls back to the bare id
        assert_eq!(json["reportedUserId"], "2");
        assert!(json["marketplaceItemId"].is_null());
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn test_resolved_report_carries_admin_note() {
        let mut report = Report::new(Snowflake::new(10), Snowflake::new(1), Snowflake::new(2), "spam".into())
            .unwrap();
        let restriction =
            Restriction::starting_at(Utc::now(), RestrictionDuration::OneDay, "spam", Snowflake::new(99));
        report.resolve_with(&restriction);

        let json = serde_json::to_value(ReportResponse::from(report)).unwrap();
        assert_eq!(json["status"], "resolved");
        assert_eq!(json["resolvedBy"], "99");
        assert_eq!(json["adminNotes"], "User restricted for 1 day. Reason: spam");
    }

    #[test]
    fn test_group_usage_by_category() {
        let usage = |id: i64, name: &str, category: &str, count: i64| ItemUsage {
            wardrobe_item_id: Snowflake::new(id),
            name: name.into(),
            category: category.into(),
            usage_count: count,
        };
        let groups = group_usage_by_category(vec![
            usage(1, "Jeans", "Bottoms", 5),
            usage(2, "Tee", "Tops", 4),
            usage(3, "Skirt", "Bottoms", 1),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Bottoms");
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].items[0].name, "Tee");
        assert!(groups.iter().flat_map(|g| &g.items).all(|i| i.max_usage == 5));
        assert!(group_usage_by_category(Vec::new()).is_empty());
    }

    #[test]
    fn test_settings_dto_formats_size() {
        let dto = SettingsDto::from(SystemSettings::default());
        assert_eq!(dto.max_file_size, "10MB");
        assert_eq!(dto.allowed_file_types, vec!["jpg", "jpeg", "png", "gif"]);
    }
}
