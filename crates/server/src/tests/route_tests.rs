// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Route tests driven through the router with `oneshot`.

use axum::{Router, http::StatusCode};
use serde_json::{Value, json};

use super::helpers::{
    TEST_OWNER, add_athlete, add_volunteer, begin_test_session, create_test_app, send,
    send_as_owner,
};

// ============================================================================
// Owner identification and sessions
// ============================================================================

#[tokio::test]
async fn test_missing_owner_header_is_unauthorized() {
    let app: Router = create_test_app();

    let (status, _): (StatusCode, Value) = send(&app, "GET", "/roster", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_blank_owner_header_is_unauthorized() {
    let app: Router = create_test_app();

    let (status, _): (StatusCode, Value) = send(&app, "POST", "/session", Some("   "), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_roster_without_session_is_not_found() {
    let app: Router = create_test_app();

    let (status, body): (StatusCode, Value) = send_as_owner(&app, "GET", "/roster", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!(true));
}

#[tokio::test]
async fn test_begin_session_twice_conflicts() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;

    let (status, _): (StatusCode, Value) = send_as_owner(&app, "POST", "/session", None).await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_end_session_without_session_is_not_found() {
    let app: Router = create_test_app();

    let (status, _): (StatusCode, Value) = send_as_owner(&app, "DELETE", "/session", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_roster_survives_end_and_begin() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;
    add_athlete(&app, "Mia").await;
    add_volunteer(&app, "Sam").await;

    let (status, body): (StatusCode, Value) =
        send_as_owner(&app, "DELETE", "/session", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["athletes"], json!(1));

    let (status, _): (StatusCode, Value) = send_as_owner(&app, "GET", "/roster", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body): (StatusCode, Value) = send_as_owner(&app, "POST", "/session", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["athletes"], json!(1));
    assert_eq!(body["volunteers"], json!(1));
}

#[tokio::test]
async fn test_owners_do_not_see_each_other() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;
    add_athlete(&app, "Mia").await;

    let (status, _): (StatusCode, Value) =
        send(&app, "POST", "/session", Some("coach-789"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body): (StatusCode, Value) =
        send(&app, "GET", "/roster", Some("coach-789"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["athletes"], json!([]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_begins_for_different_owners() {
    let app: Router = create_test_app();

    let (first, second, third) = tokio::join!(
        send(&app, "POST", "/session", Some("coach-1"), None),
        send(&app, "POST", "/session", Some("coach-2"), None),
        send(&app, "GET", "/audit", Some("coach-3"), None),
    );

    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::OK);
    assert_eq!(third.0, StatusCode::OK);
    assert_eq!(third.1["events"], json!([]));
}

// ============================================================================
// Roster edits
// ============================================================================

#[tokio::test]
async fn test_add_athlete_with_blank_name_is_bad_request() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;

    let (status, body): (StatusCode, Value) = send_as_owner(
        &app,
        "POST",
        "/athletes",
        Some(json!({ "name": "  ", "notes": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_update_athlete_and_read_roster() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;
    let athlete_id: String = add_athlete(&app, "Mia").await;

    let (status, _): (StatusCode, Value) = send_as_owner(
        &app,
        "PUT",
        &format!("/athletes/{athlete_id}"),
        Some(json!({ "name": " Mia R. ", "notes": "bring water" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, roster): (StatusCode, Value) = send_as_owner(&app, "GET", "/roster", None).await;
    assert_eq!(roster["athletes"][0]["name"], json!("Mia R."));
    assert_eq!(roster["athletes"][0]["notes"], json!("bring water"));
}

#[tokio::test]
async fn test_update_unknown_volunteer_is_not_found() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;

    let (status, _): (StatusCode, Value) = send_as_owner(
        &app,
        "PUT",
        "/volunteers/_missing",
        Some(json!({ "name": "Ghost" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_role_lifecycle() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;

    let (status, role): (StatusCode, Value) = send_as_owner(
        &app,
        "POST",
        "/roles/volunteer",
        Some(json!({ "name": "Timer" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let role_id: String = role["role_id"].as_str().unwrap().to_string();

    let (status, _): (StatusCode, Value) = send_as_owner(
        &app,
        "POST",
        "/roles/volunteer",
        Some(json!({ "name": "Timer" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _): (StatusCode, Value) = send_as_owner(
        &app,
        "POST",
        "/volunteers",
        Some(json!({ "name": "Sam", "role_ids": [role_id] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, usage): (StatusCode, Value) = send_as_owner(
        &app,
        "GET",
        &format!("/roles/volunteer/{role_id}/usage"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(usage["usage"], json!(1));
    assert_eq!(usage["name"], json!("Timer"));

    let (status, deleted): (StatusCode, Value) = send_as_owner(
        &app,
        "DELETE",
        &format!("/roles/volunteer/{role_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["removed_from_entity_count"], json!(1));

    let (_, roster): (StatusCode, Value) = send_as_owner(&app, "GET", "/roster", None).await;
    assert_eq!(roster["volunteers"][0]["role_ids"], json!([]));
}

#[tokio::test]
async fn test_role_in_unknown_namespace_is_bad_request() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;

    let (status, _): (StatusCode, Value) = send_as_owner(
        &app,
        "POST",
        "/roles/parent",
        Some(json!({ "name": "Driver" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Check-in and assignments
// ============================================================================

#[tokio::test]
async fn test_checkin_assign_and_board() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;
    let mia: String = add_athlete(&app, "Mia").await;
    let sam: String = add_volunteer(&app, "Sam").await;

    let (status, toggled): (StatusCode, Value) = send_as_owner(
        &app,
        "POST",
        &format!("/checkin/athlete/{mia}/toggle"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["checked_in"], json!(true));
    send_as_owner(
        &app,
        "POST",
        &format!("/checkin/volunteer/{sam}/toggle"),
        None,
    )
    .await;

    let (status, assigned): (StatusCode, Value) = send_as_owner(
        &app,
        "POST",
        "/assignments",
        Some(json!({ "athlete_id": mia, "volunteer_id": sam })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(assigned["changed"], json!(true));

    let (status, board): (StatusCode, Value) =
        send_as_owner(&app, "GET", "/assignments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board["athletes"][0]["volunteers"][0]["name"], json!("Sam"));
    assert_eq!(
        board["available_volunteers"][0]["assigned_elsewhere"],
        json!(true)
    );

    let (_, checkin): (StatusCode, Value) = send_as_owner(&app, "GET", "/checkin", None).await;
    assert_eq!(checkin["athletes"][0]["checked_in"], json!(true));
}

#[tokio::test]
async fn test_toggle_with_unknown_kind_is_bad_request() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;

    let (status, _): (StatusCode, Value) =
        send_as_owner(&app, "POST", "/checkin/coach/_x/toggle", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reassign_unassign_and_past_volunteers() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;
    let mia: String = add_athlete(&app, "Mia").await;
    let leo: String = add_athlete(&app, "Leo").await;
    let sam: String = add_volunteer(&app, "Sam").await;
    send_as_owner(
        &app,
        "POST",
        "/assignments",
        Some(json!({ "athlete_id": mia, "volunteer_id": sam })),
    )
    .await;

    let (status, moved): (StatusCode, Value) = send_as_owner(
        &app,
        "POST",
        "/assignments/reassign",
        Some(json!({
            "volunteer_id": sam,
            "from_athlete_id": mia,
            "to_athlete_id": leo,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(moved["moved"], json!(true));

    let (status, past): (StatusCode, Value) = send_as_owner(
        &app,
        "GET",
        &format!("/athletes/{mia}/past_volunteers"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(past["volunteers"][0]["name"], json!("Sam"));

    let (status, unassigned): (StatusCode, Value) = send_as_owner(
        &app,
        "DELETE",
        &format!("/assignments/{leo}/{sam}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unassigned["changed"], json!(true));
}

#[tokio::test]
async fn test_past_volunteers_for_unknown_athlete_is_not_found() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;

    let (status, _): (StatusCode, Value) =
        send_as_owner(&app, "GET", "/athletes/_missing/past_volunteers", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_finalize_checkin_drops_absent_athletes() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;
    let mia: String = add_athlete(&app, "Mia").await;
    let leo: String = add_athlete(&app, "Leo").await;
    let sam: String = add_volunteer(&app, "Sam").await;
    send_as_owner(
        &app,
        "POST",
        &format!("/checkin/athlete/{mia}/toggle"),
        None,
    )
    .await;
    send_as_owner(
        &app,
        "POST",
        "/assignments",
        Some(json!({ "athlete_id": leo, "volunteer_id": sam })),
    )
    .await;

    let (status, summary): (StatusCode, Value) =
        send_as_owner(&app, "POST", "/checkin/finalize", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["retained_athletes"], json!(1));
    assert_eq!(summary["dropped_athletes"], json!([leo]));
    assert_eq!(summary["released_assignments"], json!(1));
}

// ============================================================================
// Audit timeline
// ============================================================================

#[tokio::test]
async fn test_audit_lists_every_edit_in_order() {
    let app: Router = create_test_app();
    begin_test_session(&app).await;
    let mia: String = add_athlete(&app, "Mia").await;
    send_as_owner(
        &app,
        "POST",
        &format!("/checkin/athlete/{mia}/toggle"),
        None,
    )
    .await;
    send_as_owner(
        &app,
        "DELETE",
        &format!("/assignments/{mia}/_nobody"),
        None,
    )
    .await;

    let (status, timeline): (StatusCode, Value) = send_as_owner(&app, "GET", "/audit", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(timeline["owner_key"], json!(TEST_OWNER));
    let actions: Vec<&str> = timeline["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["action"].as_str().unwrap())
        .collect();
    assert_eq!(
        actions,
        vec!["AddAthlete", "ToggleCheckin", "UnassignVolunteer"]
    );
    assert_eq!(timeline["events"][0]["actor_id"], json!(TEST_OWNER));
}
