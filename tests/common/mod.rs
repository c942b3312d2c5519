#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use bookswap::adapters::in_memory;
use bookswap::api::handlers::AppState;
use bookswap::api::router::create_router;
use bookswap::application::ServiceDependencies;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Stores loaded with the demonstration data
pub fn seeded_deps() -> ServiceDependencies {
    in_memory::dependencies(true)
}

/// Router over the given stores, with no add-book delay
pub fn app(service_deps: ServiceDependencies) -> Router {
    let state = Arc::new(AppState {
        service_deps,
        submit_delay: Duration::ZERO,
    });
    create_router(state)
}

/// Response status, `Location` header, and body (JSON, plain text as a string, empty as null)
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        location,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Option<Value>) -> TestResponse {
    send(app, "POST", uri, body).await
}

/// Id of the first element of `items` whose `field` equals `value`
pub fn id_where(items: &Value, field: &str, value: &str) -> String {
    items
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item[field] == value)
        .unwrap_or_else(|| panic!("no item with {} = {}", field, value))["id"]
        .as_str()
        .unwrap()
        .to_string()
}
