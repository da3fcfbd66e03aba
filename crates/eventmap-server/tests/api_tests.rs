//! Integration tests for the view API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use eventmap_core::config::EventMapConfig;
use eventmap_server::router::build_router;
use eventmap_server::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    Arc::new(AppState::from_config(&EventMapConfig::default()).unwrap())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(router: Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(path);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn concert() -> Value {
    json!({
        "title": "Open-air concert",
        "description": "Evening concert in the park",
        "address": "Парк Горького",
        "lat": 55.7298,
        "lng": 37.6011,
        "date": "2025-08-15",
        "time": "19:00",
        "category": "Музыка"
    })
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_list_categories() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/api/categories").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["count"], 9);
    assert_eq!(json["categories"][0], "Спорт");
}

#[tokio::test]
async fn test_list_events_starts_with_seed() {
    let router = build_router(make_test_state());

    let (status, json) = send(router, "GET", "/api/events", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 5);
    assert_eq!(json["total"], 5);
    assert!(json["filter"]["category"].is_null());
}

#[tokio::test]
async fn test_filter_by_category_then_clear() {
    let state = make_test_state();

    let (status, json) = send(
        build_router(Arc::clone(&state)),
        "PUT",
        "/api/filter",
        Some(json!({ "category": "Спорт" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);

    let (_, json) = send(build_router(Arc::clone(&state)), "GET", "/api/events", None).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["events"][0]["id"], "event-1");
    assert_eq!(json["filter"]["category"], "Спорт");

    let (status, json) = send(build_router(Arc::clone(&state)), "DELETE", "/api/filter", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 5);

    let (_, json) = send(build_router(state), "GET", "/api/events", None).await;
    assert_eq!(json["count"], 5);
}

#[tokio::test]
async fn test_filter_with_start_bound() {
    let state = make_test_state();

    send(
        build_router(Arc::clone(&state)),
        "PUT",
        "/api/filter",
        Some(json!({ "start": "2025-06-20" })),
    )
    .await;

    let (_, json) = send(build_router(state), "GET", "/api/events", None).await;
    let ids: Vec<&str> = json["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert!(!ids.contains(&"event-1"));
    assert!(ids.contains(&"event-3"));
}

#[tokio::test]
async fn test_inverted_date_range_matches_nothing() {
    let state = make_test_state();

    let (status, json) = send(
        build_router(Arc::clone(&state)),
        "PUT",
        "/api/filter",
        Some(json!({ "start": "2025-07-01", "end": "2025-06-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);

    let (_, json) = send(build_router(state), "GET", "/api/events", None).await;
    assert_eq!(json["count"], 0);
    assert_eq!(json["total"], 5);
    assert_eq!(json["filter"]["date_range"]["start"], "2025-07-01");
    assert_eq!(json["filter"]["date_range"]["end"], "2025-06-01");
}

#[tokio::test]
async fn test_get_event_focuses_viewport() {
    let state = make_test_state();

    let (status, json) = send(build_router(Arc::clone(&state)), "GET", "/api/events/event-2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["event"]["category"], "Музыка");
    assert_eq!(json["viewport"]["zoom"], 15);
    assert_eq!(json["url"], "http://localhost:8080/event/event-2");

    let (_, viewport) = send(build_router(state), "GET", "/api/viewport", None).await;
    assert_eq!(viewport["zoom"], 15);
}

#[tokio::test]
async fn test_get_event_not_found() {
    let state = make_test_state();

    let (status, json) = send(build_router(Arc::clone(&state)), "GET", "/api/events/event-999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);

    let (_, viewport) = send(build_router(state), "GET", "/api/viewport", None).await;
    assert_eq!(viewport["zoom"], 12);
}

#[tokio::test]
async fn test_list_all_events_ignores_filter() {
    let state = make_test_state();

    send(
        build_router(Arc::clone(&state)),
        "PUT",
        "/api/filter",
        Some(json!({ "category": "Еда" })),
    )
    .await;

    let (status, json) = send(build_router(state), "GET", "/api/events/all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 5);
}

#[tokio::test]
async fn test_create_requires_session() {
    let router = build_router(make_test_state());

    let (status, json) = send(router, "POST", "/api/events", Some(concert())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["status"], 401);
}

#[tokio::test]
async fn test_create_rejects_missing_fields() {
    let state = make_test_state();
    let mut rx = state.subscribe();

    send(
        build_router(Arc::clone(&state)),
        "POST",
        "/api/session/sign-in",
        Some(json!({ "email": "alice@example.com", "password": "x" })),
    )
    .await;
    let _sign_in_toast = rx.recv().await.unwrap();

    let mut form = concert();
    form["address"] = json!("");
    let (status, json) = send(build_router(Arc::clone(&state)), "POST", "/api/events", Some(form)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["fields"], json!(["address"]));

    let toast = rx.recv().await.unwrap();
    assert_eq!(toast.title, "Внимание");

    let (_, json) = send(build_router(state), "GET", "/api/events/all", None).await;
    assert_eq!(json["count"], 5);
}

#[tokio::test]
async fn test_sign_in_create_and_fetch() {
    let state = make_test_state();

    let (status, session) = send(
        build_router(Arc::clone(&state)),
        "POST",
        "/api/session/sign-in",
        Some(json!({ "email": "bob@premium.io", "password": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["user"]["name"], "bob");
    assert_eq!(session["premium"], true);

    let (status, created) = send(build_router(Arc::clone(&state)), "POST", "/api/events", Some(concert())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["redirect"], "/");
    assert_eq!(created["event"]["organizer"], "bob");
    assert_eq!(created["event"]["attendees"], 0);

    let id = created["event"]["id"].as_str().unwrap().to_owned();
    let (status, fetched) = send(
        build_router(Arc::clone(&state)),
        "GET",
        &format!("/api/events/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["event"], created["event"]);

    let (status, mine) = send(build_router(state), "GET", "/api/session/events", None).await;
    assert_eq!(status, StatusCode::OK);
    let mine: Vec<&str> = mine["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert!(mine.contains(&id.as_str()));
}

#[tokio::test]
async fn test_sign_in_with_empty_fields_is_a_no_op() {
    let state = make_test_state();
    let mut rx = state.subscribe();

    let (status, session) = send(
        build_router(Arc::clone(&state)),
        "POST",
        "/api/session/sign-in",
        Some(json!({ "email": "", "password": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(session["user"].is_null());
    assert_eq!(session["authenticated"], false);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_sign_up_then_sign_out() {
    let state = make_test_state();

    let (_, session) = send(
        build_router(Arc::clone(&state)),
        "POST",
        "/api/session/sign-up",
        Some(json!({ "name": "Карина", "email": "karina@premium.io", "password": "x" })),
    )
    .await;
    assert_eq!(session["user"]["name"], "Карина");
    assert_eq!(session["premium"], false);
    assert!(session["user"]["id"].as_str().unwrap().starts_with("user-"));

    let (status, session) = send(build_router(Arc::clone(&state)), "DELETE", "/api/session", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(session["user"].is_null());

    let (status, _) = send(build_router(state), "GET", "/api/session/events", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_share_returns_link_and_toasts() {
    let state = make_test_state();
    let mut rx = state.subscribe();

    let (status, json) = send(
        build_router(Arc::clone(&state)),
        "POST",
        "/api/events/event-4/share",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"], "copied");
    assert_eq!(json["url"], "http://localhost:8080/event/event-4");
    assert_eq!(rx.recv().await.unwrap().title, "Ссылка скопирована");

    let (status, _) = send(build_router(state), "POST", "/api/events/nope/share", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_fly_to_sets_exact_camera() {
    let state = make_test_state();

    send(
        build_router(Arc::clone(&state)),
        "PUT",
        "/api/viewport",
        Some(json!({ "center": { "lng": 30.0, "lat": 50.0 }, "zoom": 3 })),
    )
    .await;

    let (status, json) = send(
        build_router(Arc::clone(&state)),
        "POST",
        "/api/viewport/fly-to",
        Some(json!({ "center": { "lng": 37.62, "lat": 55.75 }, "zoom": 15 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["center"], json!({ "lng": 37.62, "lat": 55.75 }));
    assert_eq!(json["zoom"], 15);

    let (_, json) = send(
        build_router(state),
        "POST",
        "/api/viewport/fly-to",
        Some(json!({ "center": { "lng": 37.0, "lat": 55.0 } })),
    )
    .await;
    assert_eq!(json["zoom"], 14);
}

#[tokio::test]
async fn test_map_returns_tile_source_and_camera() {
    let state = make_test_state();

    send(
        build_router(Arc::clone(&state)),
        "POST",
        "/api/viewport/fly-to",
        Some(json!({ "center": { "lng": 37.6, "lat": 55.7 }, "zoom": 13 })),
    )
    .await;

    let (status, json) = send(build_router(state), "GET", "/api/map", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["tile_url"],
        "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
    );
    assert_eq!(json["viewport"]["zoom"], 13);
    assert_eq!(json["viewport"]["center"], json!({ "lng": 37.6, "lat": 55.7 }));
}

#[tokio::test]
async fn test_loaded_flag_transitions() {
    let state = make_test_state();

    let (_, json) = send(build_router(Arc::clone(&state)), "GET", "/api/viewport", None).await;
    assert_eq!(json["loaded"], false);

    let (_, json) = send(
        build_router(Arc::clone(&state)),
        "PUT",
        "/api/viewport/loaded",
        Some(json!({ "loaded": true })),
    )
    .await;
    assert_eq!(json["loaded"], true);

    let (_, json) = send(
        build_router(state),
        "PUT",
        "/api/viewport/loaded",
        Some(json!({ "loaded": false })),
    )
    .await;
    assert_eq!(json["loaded"], false);
}

#[tokio::test]
async fn test_stale_selection_resolves_to_null() {
    let state = make_test_state();

    send(
        build_router(Arc::clone(&state)),
        "PUT",
        "/api/viewport/selected",
        Some(json!({ "event_id": "event-5" })),
    )
    .await;
    let (_, json) = send(build_router(Arc::clone(&state)), "GET", "/api/viewport/selected", None).await;
    assert_eq!(json["event"]["id"], "event-5");

    send(
        build_router(Arc::clone(&state)),
        "PUT",
        "/api/viewport/selected",
        Some(json!({ "event_id": "event-77" })),
    )
    .await;
    let (_, json) = send(build_router(state), "GET", "/api/viewport/selected", None).await;
    assert_eq!(json["event_id"], "event-77");
    assert!(json["event"].is_null());
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
