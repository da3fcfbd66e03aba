//! View-facing API server for EventMap.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** for every store operation the screens need
//!   (catalog and filter, session, viewport, event creation and sharing)
//! - **`WebSocket` endpoint** (`/ws/notifications`) streaming toasts via
//!   [`tokio::sync::broadcast`]
//! - **Minimal HTML status page** (`GET /`) showing catalog size, the
//!   active filter, the session and the map camera
//!
//! # Architecture
//!
//! One [`App`](eventmap_core::App) lives behind a [`tokio::sync::RwLock`]
//! inside [`AppState`]. Reads take the read lock; every mutation takes the
//! write lock for the duration of a single store call, so each operation
//! is atomic with respect to the others. Toasts raised by the stores go
//! through a [`BroadcastNotifier`] to all connected `WebSocket` clients.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod ws;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::{AppState, BroadcastNotifier};
