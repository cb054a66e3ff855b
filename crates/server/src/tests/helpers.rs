// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helpers for driving the router in-process.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use practice_roster_persistence::Persistence;
use serde_json::Value;
use tower::ServiceExt;

use crate::session::OWNER_KEY_HEADER;
use crate::{AppState, build_router};

pub const TEST_OWNER: &str = "coach-123";

/// Helper to create test app state with in-memory persistence.
pub fn create_test_app_state() -> AppState {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    AppState::new(persistence)
}

pub fn create_test_app() -> Router {
    build_router(create_test_app_state())
}

/// Sends one request and returns the status and the JSON body.
///
/// Bodies that are not JSON come back as `Value::Null`.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    owner: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(owner) = owner {
        builder = builder.header(OWNER_KEY_HEADER, owner);
    }
    let request: Request<Body> = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Sends a request as the test owner.
pub async fn send_as_owner(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send(app, method, uri, Some(TEST_OWNER), body).await
}

pub async fn begin_test_session(app: &Router) {
    let (status, _): (StatusCode, Value) = send_as_owner(app, "POST", "/session", None).await;
    assert_eq!(status, StatusCode::OK);
}

/// Adds an athlete and returns its id.
pub async fn add_athlete(app: &Router, name: &str) -> String {
    let (status, body): (StatusCode, Value) = send_as_owner(
        app,
        "POST",
        "/athletes",
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["athlete_id"].as_str().unwrap().to_string()
}

/// Adds a volunteer and returns its id.
pub async fn add_volunteer(app: &Router, name: &str) -> String {
    let (status, body): (StatusCode, Value) = send_as_owner(
        app,
        "POST",
        "/volunteers",
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["volunteer_id"].as_str().unwrap().to_string()
}
