//! Axum router construction for the view API.
//!
//! Assembles all routes (REST + `WebSocket`) into a single [`Router`]
//! with CORS middleware enabled for the browser client.

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router for the view API.
///
/// See [`handlers`] for the endpoint table. `GET /ws/notifications`
/// streams toasts.
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // WebSocket
        .route("/ws/notifications", get(ws::ws_notifications))
        // Catalog
        .route("/api/categories", get(handlers::list_categories))
        .route(
            "/api/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route("/api/events/all", get(handlers::list_all_events))
        .route("/api/events/{id}", get(handlers::get_event))
        .route("/api/events/{id}/share", post(handlers::share_event))
        .route(
            "/api/filter",
            put(handlers::apply_filter).delete(handlers::clear_filter),
        )
        // Session
        .route(
            "/api/session",
            get(handlers::get_session).delete(handlers::sign_out),
        )
        .route("/api/session/sign-in", post(handlers::sign_in))
        .route("/api/session/sign-up", post(handlers::sign_up))
        .route("/api/session/events", get(handlers::my_events))
        // Map and viewport
        .route("/api/map", get(handlers::get_map))
        .route(
            "/api/viewport",
            get(handlers::get_viewport).put(handlers::move_viewport),
        )
        .route("/api/viewport/fly-to", post(handlers::fly_to))
        .route("/api/viewport/loaded", put(handlers::set_loaded))
        .route(
            "/api/viewport/selected",
            get(handlers::get_selected).put(handlers::set_selected),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
