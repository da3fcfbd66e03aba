//! Toast stream over `WebSocket`.
//!
//! `GET /ws/notifications` first replays the recent toast backlog, then
//! forwards every new toast as a JSON [`Notification`] text frame. The
//! channel is one-way; frames from the client are ignored until it closes.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use eventmap_types::Notification;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::state::AppState;

/// Upgrade to a `WebSocket` and stream toasts.
///
/// # Route
///
/// `GET /ws/notifications`
pub async fn ws_notifications(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| stream_toasts(socket, state))
}

async fn stream_toasts(mut socket: WebSocket, state: Arc<AppState>) {
    let (backlog, mut rx) = state.subscribe_with_backlog();
    debug!(backlog = backlog.len(), "Toast stream opened");

    for toast in &backlog {
        if !send_toast(&mut socket, toast).await {
            return;
        }
    }

    loop {
        tokio::select! {
            received = rx.recv() => match received {
                Ok(toast) => {
                    if !send_toast(&mut socket, &toast).await {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => debug!(skipped, "Toast stream lagged"),
                Err(RecvError::Closed) => break,
            },
            // Pings are answered by the socket itself.
            incoming = socket.recv() => {
                if matches!(incoming, None | Some(Err(_) | Ok(Message::Close(_)))) {
                    break;
                }
            }
        }
    }

    debug!("Toast stream closed");
}

/// Send one toast. `false` once the client is gone.
async fn send_toast(socket: &mut WebSocket, toast: &Notification) -> bool {
    match serde_json::to_string(toast) {
        Ok(json) => socket.send(Message::Text(json.into())).await.is_ok(),
        Err(e) => {
            warn!(error = %e, "Failed to serialize toast");
            true
        }
    }
}
