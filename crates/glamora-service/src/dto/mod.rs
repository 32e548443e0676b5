//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    parse_filter, AdminLoginRequest, AdminUpdateUserRequest, AnalyticsQuery,
    CreateListingRequest, CreateOutfitRequest, CreateWardrobeItemRequest, ItemListQuery,
    LoginRequest, LogoutRequest, OutfitItemRequest, PageRequest, RefreshTokenRequest,
    RegisterRequest, RejectItemRequest, ReportListQuery, RestrictUserRequest, SetFavoriteRequest,
    SubmitReportRequest, TrackUsageRequest, UpdateProfileRequest, UpdateReportRequest,
    UpdateSettingsRequest, UsageRangeQuery, UserListQuery, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

pub use responses::{
    AnalyticsResponse, AuthResponse, AuthUserResponse, CategoriesResponse, CategoryCountResponse,
    CategoryUsageResponse, FrequentUsageResponse, HealthChecks, HealthResponse,
    ItemActionResponse, ItemListResponse, ItemSummaryResponse, ItemsResponse,
    MarketplaceItemResponse, MessageResponse, MetricsResponse, MonthlyCountResponse,
    OutfitEnvelope, OutfitResponse, OutfitsResponse, PageMeta, Populated, ProfileResponse,
    ReadinessResponse, ReportListResponse, ReportResponse, ReportUpdatedResponse,
    RestrictionResponse, SettingsDto, SettingsResponse, SettingsUpdatedResponse,
    TrackUsageResponse, UsageItemResponse, UserDetailResponse, UserListResponse, UserResponse,
    UserStats, UserSummaryResponse, UserUpdatedResponse, WardrobeItemResponse,
    WardrobeItemsResponse,
};

pub use mappers::group_usage_by_category;
