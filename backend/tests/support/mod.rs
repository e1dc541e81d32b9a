#![allow(dead_code)]
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;
use workday_backend::{
    config::Config,
    models::day_override::{DayKind, DayOverride, OverrideSet},
    repositories::{KeyValueStore, MemoryStore},
    routes,
    state::AppState,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn holiday(d: NaiveDate, label: &str) -> DayOverride {
    DayOverride::new(d, DayKind::Holiday, label)
}

pub fn workday(d: NaiveDate, label: &str) -> DayOverride {
    DayOverride::new(d, DayKind::Workday, label)
}

pub fn set_of(entries: Vec<DayOverride>) -> OverrideSet {
    entries.into_iter().collect()
}

pub fn test_config(include_baseline: bool) -> Config {
    Config {
        include_baseline,
        ..Config::default()
    }
}

/// State over an in-memory store with the compiled-in baseline.
pub fn test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let dyn_store: Arc<dyn KeyValueStore> = store.clone();
    (AppState::new(dyn_store, test_config(true)), store)
}

pub fn test_app() -> (Router, AppState) {
    let (state, _) = test_state();
    (routes::router(state.clone()), state)
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("call router")
}

pub async fn response_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json")
}
