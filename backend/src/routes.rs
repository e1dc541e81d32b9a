use std::time::Duration;

use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, docs::ApiDoc, handlers, state::AppState};

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allow_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(24 * 60 * 60))
}

/// Builds the full application router, including the OpenAPI UI.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let system_routes = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/info", get(handlers::health::api_info));

    let calendar_routes = Router::new()
        .route("/api/calendar", get(handlers::calendar::get_month))
        .route("/api/calendar/days/{date}", get(handlers::calendar::get_day));

    let calculate_routes = Router::new()
        .route(
            "/api/calculate/range",
            post(handlers::calculate::calculate_range_handler),
        )
        .route(
            "/api/calculate/end-date",
            post(handlers::calculate::calculate_end_date),
        )
        .route(
            "/api/calculate/work-hours",
            post(handlers::calculate::calculate_work_hours),
        );

    let override_routes = Router::new()
        .route("/api/overrides", get(handlers::overrides::list_merged))
        .route(
            "/api/overrides/baseline",
            get(handlers::overrides::list_baseline),
        )
        .route(
            "/api/overrides/personal",
            get(handlers::overrides::list_personal).put(handlers::overrides::upsert_personal),
        )
        .route(
            "/api/overrides/personal/{date}",
            delete(handlers::overrides::delete_personal),
        )
        .route(
            "/api/overrides/promotions",
            get(handlers::overrides::list_promotions),
        );

    let storage_routes = Router::new()
        .route(
            "/api/storage",
            get(handlers::storage::storage_info).delete(handlers::storage::clear_storage),
        )
        .route(
            "/api/settings",
            get(handlers::settings::get_settings).put(handlers::settings::update_settings),
        );

    Router::new()
        .merge(system_routes)
        .merge(calendar_routes)
        .merge(calculate_routes)
        .merge(override_routes)
        .merge(storage_routes)
        .fallback(handlers::health::not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
