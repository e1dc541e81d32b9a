#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    handlers::{
        calendar::{CalendarMonthResponse, CalendarQuery},
        health::{ApiInfoResponse, EndpointInfo, HealthResponse},
        overrides::UpsertDayOverrideResponse,
    },
    models::{
        calculation::{
            CalculationResult, DayWorkDetail, EndDateRequest, EndDateResponse, EndDateUnit,
            RangeRequest, WorkHoursRequest, WorkedPeriod,
        },
        day_override::{DayKind, DayOverride, UpsertDayOverridePayload},
    },
    repositories::{
        settings::{DefaultWorkHours, TimeSpan},
        AppSettings, AppSettingsPatch, CalculationMode, PromotionCandidates, StorageInfo,
    },
    services::{day_classifier::DayVerdict, work_hours::WorkPeriod},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workday Calculator API",
        description = "Workday, calendar-day and work-hour calculations over the Taiwan calendar"
    ),
    paths(
        health_doc,
        api_info_doc,
        calendar_month_doc,
        calendar_day_doc,
        calculate_range_doc,
        calculate_end_date_doc,
        calculate_work_hours_doc,
        list_overrides_doc,
        list_baseline_doc,
        list_personal_doc,
        upsert_personal_doc,
        delete_personal_doc,
        list_promotions_doc,
        storage_info_doc,
        clear_storage_doc,
        get_settings_doc,
        update_settings_doc
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            ApiInfoResponse,
            EndpointInfo,
            // calendar
            CalendarQuery,
            CalendarMonthResponse,
            DayVerdict,
            DayKind,
            // calculations
            RangeRequest,
            EndDateRequest,
            EndDateResponse,
            EndDateUnit,
            WorkHoursRequest,
            CalculationResult,
            DayWorkDetail,
            WorkedPeriod,
            WorkPeriod,
            // overrides
            DayOverride,
            UpsertDayOverridePayload,
            UpsertDayOverrideResponse,
            PromotionCandidates,
            // storage & settings
            StorageInfo,
            AppSettings,
            AppSettingsPatch,
            CalculationMode,
            DefaultWorkHours,
            TimeSpan
        )
    ),
    tags(
        (name = "System", description = "Health and service information"),
        (name = "Calendar", description = "Day classification"),
        (name = "Calculate", description = "Range, end-date and work-hour calculations"),
        (name = "Overrides", description = "Baseline and personal day overrides"),
        (name = "Storage", description = "Stored data and app settings")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, body = HealthResponse)),
    tag = "System"
)]
fn health_doc() {}

#[utoipa::path(
    get,
    path = "/api/info",
    responses((status = 200, body = ApiInfoResponse)),
    tag = "System"
)]
fn api_info_doc() {}

#[utoipa::path(
    get,
    path = "/api/calendar",
    params(CalendarQuery),
    responses(
        (status = 200, body = CalendarMonthResponse),
        (status = 400, body = ErrorResponse)
    ),
    tag = "Calendar"
)]
fn calendar_month_doc() {}

#[utoipa::path(
    get,
    path = "/api/calendar/days/{date}",
    params(("date" = String, Path, description = "YYYY-MM-DD")),
    responses((status = 200, body = DayVerdict), (status = 400, body = ErrorResponse)),
    tag = "Calendar"
)]
fn calendar_day_doc() {}

#[utoipa::path(
    post,
    path = "/api/calculate/range",
    request_body = RangeRequest,
    responses(
        (status = 200, body = CalculationResult),
        (status = 400, body = ErrorResponse)
    ),
    tag = "Calculate"
)]
fn calculate_range_doc() {}

#[utoipa::path(
    post,
    path = "/api/calculate/end-date",
    request_body = EndDateRequest,
    responses(
        (status = 200, body = EndDateResponse),
        (status = 400, body = ErrorResponse),
        (status = 422, description = "No workday within the search bound", body = ErrorResponse)
    ),
    tag = "Calculate"
)]
fn calculate_end_date_doc() {}

#[utoipa::path(
    post,
    path = "/api/calculate/work-hours",
    request_body = WorkHoursRequest,
    responses(
        (status = 200, body = CalculationResult),
        (status = 400, body = ErrorResponse)
    ),
    tag = "Calculate"
)]
fn calculate_work_hours_doc() {}

#[utoipa::path(
    get,
    path = "/api/overrides",
    responses((status = 200, body = [DayOverride])),
    tag = "Overrides"
)]
fn list_overrides_doc() {}

#[utoipa::path(
    get,
    path = "/api/overrides/baseline",
    responses((status = 200, body = [DayOverride])),
    tag = "Overrides"
)]
fn list_baseline_doc() {}

#[utoipa::path(
    get,
    path = "/api/overrides/personal",
    responses((status = 200, body = [DayOverride])),
    tag = "Overrides"
)]
fn list_personal_doc() {}

#[utoipa::path(
    put,
    path = "/api/overrides/personal",
    request_body = UpsertDayOverridePayload,
    responses(
        (status = 201, description = "Created", body = UpsertDayOverrideResponse),
        (status = 200, description = "Replaced", body = UpsertDayOverrideResponse),
        (status = 400, body = ErrorResponse)
    ),
    tag = "Overrides"
)]
fn upsert_personal_doc() {}

#[utoipa::path(
    delete,
    path = "/api/overrides/personal/{date}",
    params(("date" = String, Path, description = "YYYY-MM-DD")),
    responses((status = 200, body = DayOverride), (status = 404, body = ErrorResponse)),
    tag = "Overrides"
)]
fn delete_personal_doc() {}

#[utoipa::path(
    get,
    path = "/api/overrides/promotions",
    responses((status = 200, body = PromotionCandidates)),
    tag = "Overrides"
)]
fn list_promotions_doc() {}

#[utoipa::path(
    get,
    path = "/api/storage",
    responses((status = 200, body = StorageInfo)),
    tag = "Storage"
)]
fn storage_info_doc() {}

#[utoipa::path(
    delete,
    path = "/api/storage",
    responses((status = 204, description = "Stored data cleared")),
    tag = "Storage"
)]
fn clear_storage_doc() {}

#[utoipa::path(
    get,
    path = "/api/settings",
    responses((status = 200, body = AppSettings)),
    tag = "Storage"
)]
fn get_settings_doc() {}

#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = AppSettingsPatch,
    responses((status = 200, body = AppSettings), (status = 400, body = ErrorResponse)),
    tag = "Storage"
)]
fn update_settings_doc() {}
