use axum::{http::Uri, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, utils::time::now_utc};

pub const SERVICE_NAME: &str = "Workday Calculator API";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfoResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/health", "Health check"),
    ("GET", "/api/info", "API information"),
    ("GET", "/api/calendar", "Classify every day of a month"),
    ("GET", "/api/calendar/days/{date}", "Classify one day"),
    ("POST", "/api/calculate/range", "Count days in a date range"),
    ("POST", "/api/calculate/end-date", "Find the date after N days"),
    ("POST", "/api/calculate/work-hours", "Total work hours in a range"),
    ("GET", "/api/overrides", "Baseline merged with personal overrides"),
    ("GET", "/api/overrides/baseline", "Published baseline overrides"),
    ("GET", "/api/overrides/personal", "Personal overrides"),
    ("PUT", "/api/overrides/personal", "Add or replace a personal override"),
    ("DELETE", "/api/overrides/personal/{date}", "Remove a personal override"),
    ("GET", "/api/overrides/promotions", "Personal overrides missing from the baseline"),
    ("GET", "/api/storage", "Stored data summary"),
    ("DELETE", "/api/storage", "Clear stored data"),
    ("GET", "/api/settings", "App settings"),
    ("PUT", "/api/settings", "Update app settings"),
];

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: SERVICE_VERSION.to_string(),
        timestamp: now_utc(),
    })
}

pub async fn api_info() -> Json<ApiInfoResponse> {
    let endpoints = ENDPOINTS
        .iter()
        .map(|&(method, path, description)| EndpointInfo {
            method: method.to_string(),
            path: path.to_string(),
            description: description.to_string(),
        })
        .collect();

    Json(ApiInfoResponse {
        name: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        description: "API for Taiwan workday calculations".to_string(),
        endpoints,
    })
}

pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no route matched");
    AppError::NotFound(format!("Route not found: {}", uri.path()))
}
