mod support;

use axum::http::{header, Method, StatusCode};
use serde_json::Value;
use support::{empty_request, response_json, send, test_app};
use utoipa::OpenApi;
use workday_backend::docs::ApiDoc;

#[tokio::test]
async fn health_and_info() {
    let (app, _) = test_app();

    let response = send(&app, empty_request(Method::GET, "/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let response = send(&app, empty_request(Method::GET, "/api/info")).await;
    let body = response_json(response).await;
    assert_eq!(body["name"], "Workday Calculator API");
    let paths: Vec<&str> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|endpoint| endpoint["path"].as_str())
        .collect();
    assert!(paths.contains(&"/api/calculate/work-hours"));
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let (app, _) = test_app();
    let response = send(&app, empty_request(Method::GET, "/api/nope")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response_json(response).await["code"], "NOT_FOUND");
}

#[test]
fn openapi_lists_calculation_paths() {
    let json = serde_json::to_value(ApiDoc::openapi()).expect("serialize openapi");
    let paths = json
        .get("paths")
        .and_then(Value::as_object)
        .expect("paths object");

    for path in [
        "/api/calculate/range",
        "/api/calculate/end-date",
        "/api/calculate/work-hours",
        "/api/overrides/personal/{date}",
    ] {
        assert!(paths.contains_key(path), "{}", path);
    }
    assert!(json.pointer("/components/schemas/CalculationResult").is_some());
}

#[tokio::test]
async fn swagger_ui_is_served() {
    let (app, _) = test_app();

    let response = send(&app, empty_request(Method::GET, "/api-docs/openapi.json")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["paths"]["/health"].is_object());

    let response = send(&app, empty_request(Method::GET, "/swagger-ui")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/swagger-ui/");
}
