//! REST API endpoint handlers for the view API.
//!
//! Every handler takes the [`App`](eventmap_core::App) lock once, performs a
//! single store operation and renders the result.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/categories` | Category list |
//! | `GET` | `/api/events` | Filtered view and the active filter |
//! | `POST` | `/api/events` | Create an event from the form |
//! | `GET` | `/api/events/all` | Full catalog |
//! | `GET` | `/api/events/{id}` | Open an event (focuses the map) |
//! | `POST` | `/api/events/{id}/share` | Copy-link fallback for sharing |
//! | `PUT` | `/api/filter` | Apply a filter |
//! | `DELETE` | `/api/filter` | Clear the filter |
//! | `GET` | `/api/session` | Current user |
//! | `DELETE` | `/api/session` | Sign out |
//! | `POST` | `/api/session/sign-in` | Sign in |
//! | `POST` | `/api/session/sign-up` | Sign up |
//! | `GET` | `/api/session/events` | Events organized by the current user |
//! | `GET` | `/api/map` | Tile source and camera for the map view |
//! | `GET` | `/api/viewport` | Camera state |
//! | `PUT` | `/api/viewport` | Camera moved by the user |
//! | `POST` | `/api/viewport/fly-to` | Fly to a point |
//! | `PUT` | `/api/viewport/loaded` | Map ready / torn down |
//! | `GET` | `/api/viewport/selected` | Resolve the selection |
//! | `PUT` | `/api/viewport/selected` | Select an event or clear |

use std::cell::RefCell;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use chrono::NaiveDate;
use eventmap_core::form::EventForm;
use eventmap_core::share::{Clipboard, ShareError};
use eventmap_core::App;
use eventmap_types::{DateRange, EventCategory, EventId, FilterState, LngLat, User};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /api/filter`.
///
/// Every field is optional; a missing field matches everything on that axis.
#[derive(Debug, Default, serde::Deserialize)]
pub struct FilterRequest {
    /// Category label (e.g. `"Спорт"`), or `null` for all categories.
    #[serde(default)]
    pub category: Option<EventCategory>,
    /// First date included.
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Last date included.
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl FilterRequest {
    const fn into_filter(self) -> FilterState {
        FilterState::new(self.category, DateRange::new(self.start, self.end))
    }
}

/// Request body for `POST /api/session/sign-in`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct SignInRequest {
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Password (not verified).
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /api/session/sign-up`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct SignUpRequest {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Password (not stored).
    #[serde(default)]
    pub password: String,
}

/// Request body for `PUT /api/viewport`.
#[derive(Debug, serde::Deserialize)]
pub struct MoveRequest {
    /// New map center.
    pub center: LngLat,
    /// New zoom level.
    pub zoom: u8,
}

/// Request body for `POST /api/viewport/fly-to`.
#[derive(Debug, serde::Deserialize)]
pub struct FlyToRequest {
    /// Target center.
    pub center: LngLat,
    /// Target zoom; the configured fly-to zoom when omitted.
    #[serde(default)]
    pub zoom: Option<u8>,
}

/// Request body for `PUT /api/viewport/loaded`.
#[derive(Debug, serde::Deserialize)]
pub struct LoadedRequest {
    /// Whether the map surface is initialized.
    pub loaded: bool,
}

/// Request body for `PUT /api/viewport/selected`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct SelectRequest {
    /// Event to select; `null` clears the selection.
    #[serde(default)]
    pub event_id: Option<EventId>,
}

#[derive(Debug, serde::Serialize)]
struct SessionView<'a> {
    user: Option<&'a User>,
    authenticated: bool,
    premium: bool,
}

impl<'a> SessionView<'a> {
    fn of(app: &'a App) -> Self {
        let session = app.session();
        Self {
            user: session.current_user(),
            authenticated: session.is_authenticated(),
            premium: session.is_premium(),
        }
    }
}

/// Clipboard stand-in for a server: the "copied" text becomes part of the
/// response so the client can put it on its own clipboard.
#[derive(Debug, Default)]
struct ResponseClipboard(RefCell<Option<String>>);

impl Clipboard for ResponseClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        self.0.replace(Some(text.to_owned()));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing store status and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let app = state.app.read().await;
    let total = app.catalog().len();
    let visible = app.catalog().filtered().len();
    let filter = app.catalog().active_filter();
    let category = filter.category.map_or("все", EventCategory::label);
    let user = app
        .session()
        .current_user()
        .map_or_else(|| String::from("гость"), |u| u.name.clone());
    let viewport = app.viewport().state();
    let center = format!("{:.4}, {:.4}", viewport.center.lng, viewport.center.lat);
    let zoom = viewport.zoom;
    let loaded = if viewport.loaded { "yes" } else { "no" };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="utf-8">
    <title>EventMap</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>EventMap</h1>
    <p class="subtitle">Events on the map of Moscow</p>

    <div>
        <div class="metric">
            <div class="label">Events</div>
            <div class="value">{total}</div>
        </div>
        <div class="metric">
            <div class="label">Visible</div>
            <div class="value">{visible}</div>
        </div>
        <div class="metric">
            <div class="label">Category</div>
            <div class="value">{category}</div>
        </div>
        <div class="metric">
            <div class="label">User</div>
            <div class="value">{user}</div>
        </div>
        <div class="metric">
            <div class="label">Center</div>
            <div class="value">{center}</div>
        </div>
        <div class="metric">
            <div class="label">Zoom</div>
            <div class="value">{zoom}</div>
        </div>
        <div class="metric">
            <div class="label">Map loaded</div>
            <div class="value">{loaded}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li><a href="/api/categories">/api/categories</a> -- Categories</li>
        <li><a href="/api/events">/api/events</a> -- Filtered events</li>
        <li><a href="/api/events/all">/api/events/all</a> -- All events</li>
        <li><a href="/api/session">/api/session</a> -- Current session</li>
        <li><a href="/api/viewport">/api/viewport</a> -- Map camera</li>
    </ul>

    <h2>WebSocket</h2>
    <ul>
        <li><code>ws://host:port/ws/notifications</code> -- Toast stream</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// List every category in display order.
pub async fn list_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let app = state.app.read().await;
    let categories = app.catalog().categories();
    Json(serde_json::json!({
        "count": categories.len(),
        "categories": categories,
    }))
}

/// The filtered view together with the filter that produced it.
pub async fn list_events(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let app = state.app.read().await;
    let events = app.catalog().filtered();
    Json(serde_json::json!({
        "count": events.len(),
        "total": app.catalog().len(),
        "filter": app.catalog().active_filter(),
        "events": events,
    }))
}

/// The full catalog in insertion order.
pub async fn list_all_events(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let app = state.app.read().await;
    let events = app.catalog().events();
    Json(serde_json::json!({
        "count": events.len(),
        "events": events,
    }))
}

/// Open the detail screen of one event, focusing the map on it.
///
/// Unknown ids answer `404`; the client redirects home.
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = EventId::new(id);
    let mut app = state.app.write().await;
    let event = app
        .open_event(&id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("event {id} not found")))?;

    Ok(Json(serde_json::json!({
        "event": event,
        "viewport": app.viewport().state(),
        "url": app.event_url(&id),
    })))
}

/// Create an event as the signed-in user.
///
/// Answers `401` when signed out and `422` when required fields are
/// missing. On success the client navigates to `redirect`.
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(form): Json<EventForm>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.app.write().await.create_event(form)?;
    info!(event_id = %created.event.id, "Event created via API");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "event": created.event,
            "redirect": created.redirect.path(),
        })),
    ))
}

/// Copy-link fallback for sharing an event.
///
/// A server has no share sheet, so the link always takes the clipboard
/// route: it is returned to the client and the copy toast is raised.
pub async fn share_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = EventId::new(id);
    let clipboard = ResponseClipboard::default();
    let outcome = state
        .app
        .read()
        .await
        .share_event(&id, None, &clipboard)
        .ok_or_else(|| ApiError::NotFound(format!("event {id} not found")))?;

    Ok(Json(serde_json::json!({
        "outcome": outcome,
        "url": clipboard.0.into_inner(),
    })))
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Replace the active filter.
///
/// Any range is accepted; one that ends before it starts matches nothing.
pub async fn apply_filter(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FilterRequest>,
) -> impl IntoResponse {
    let filter = body.into_filter();
    let mut app = state.app.write().await;
    let count = app.catalog_mut().apply_filter(filter);
    Json(serde_json::json!({
        "count": count,
        "filter": filter,
    }))
}

/// Reset the filter to match everything.
pub async fn clear_filter(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut app = state.app.write().await;
    let count = app.catalog_mut().clear_filter();
    Json(serde_json::json!({
        "count": count,
        "filter": app.catalog().active_filter(),
    }))
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The current session.
pub async fn get_session(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let app = state.app.read().await;
    Ok(Json(serde_json::to_value(SessionView::of(&app))?))
}

/// Sign in. Empty credentials leave the session untouched.
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignInRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut app = state.app.write().await;
    app.session_mut().sign_in(&body.email, &body.password);
    Ok(Json(serde_json::to_value(SessionView::of(&app))?))
}

/// Register and sign in. Empty fields leave the session untouched.
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignUpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut app = state.app.write().await;
    app.session_mut()
        .sign_up(&body.name, &body.email, &body.password);
    Ok(Json(serde_json::to_value(SessionView::of(&app))?))
}

/// Sign out.
pub async fn sign_out(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let mut app = state.app.write().await;
    app.session_mut().sign_out();
    Ok(Json(serde_json::to_value(SessionView::of(&app))?))
}

/// Events organized by the signed-in user (the profile's "my events" tab).
pub async fn my_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let app = state.app.read().await;
    if !app.session().is_authenticated() {
        return Err(ApiError::Unauthorized);
    }
    let events = app.my_events();
    Ok(Json(serde_json::json!({
        "count": events.len(),
        "events": events,
    })))
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// What the map view needs on (re)mount: the tile source and the camera.
pub async fn get_map(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let app = state.app.read().await;
    Json(serde_json::json!({
        "tile_url": app.tile_url(),
        "viewport": app.viewport().state(),
    }))
}

/// The camera state.
pub async fn get_viewport(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let app = state.app.read().await;
    Json(app.viewport().state().clone())
}

/// Record a camera change made on the map.
pub async fn move_viewport(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MoveRequest>,
) -> impl IntoResponse {
    let mut app = state.app.write().await;
    app.viewport_mut().map_moved(body.center, body.zoom);
    Json(app.viewport().state().clone())
}

/// Fly the camera to a point.
pub async fn fly_to(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FlyToRequest>,
) -> impl IntoResponse {
    let mut app = state.app.write().await;
    app.viewport_mut().fly_to(body.center, body.zoom);
    Json(app.viewport().state().clone())
}

/// The map surface finished initializing, or is being torn down.
pub async fn set_loaded(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoadedRequest>,
) -> impl IntoResponse {
    let mut app = state.app.write().await;
    if body.loaded {
        app.viewport_mut().map_ready();
    } else {
        app.viewport_mut().map_teardown();
    }
    Json(app.viewport().state().clone())
}

/// Select an event on the map, or clear the selection.
///
/// Any id is accepted; resolution happens on read.
pub async fn set_selected(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SelectRequest>,
) -> impl IntoResponse {
    let mut app = state.app.write().await;
    app.select_event(body.event_id);
    Json(app.viewport().state().clone())
}

/// Resolve the selection; `event` is `null` when it no longer exists.
pub async fn get_selected(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let app = state.app.read().await;
    Json(serde_json::json!({
        "event_id": app.viewport().selected_id(),
        "event": app.selected_event(),
    }))
}
