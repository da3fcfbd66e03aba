//! Shared application state for the view API.
//!
//! [`AppState`] owns the single [`App`] instance behind a read-write lock
//! and the toast feed: a broadcast channel for live `WebSocket` clients
//! plus a short backlog replayed to clients that connect late.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use eventmap_core::config::EventMapConfig;
use eventmap_core::notify::{Notifier, TracingNotifier};
use eventmap_core::{App, CoreError};
use eventmap_types::Notification;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, warn};

/// Capacity of the broadcast channel for toasts.
///
/// If a subscriber falls behind by more than this many messages it will
/// receive a [`broadcast::error::RecvError::Lagged`] and skip to the
/// newest message.
const BROADCAST_CAPACITY: usize = 256;

/// How many past toasts a newly connected client is shown.
pub const BACKLOG_LEN: usize = 20;

/// Toast fan-out shared by the notifier and the `WebSocket` handler.
///
/// Recording into the backlog and sending on the channel happen under one
/// lock, so a subscriber taken together with a backlog snapshot neither
/// misses nor repeats a toast.
#[derive(Debug)]
struct ToastFeed {
    tx: broadcast::Sender<Notification>,
    backlog: Mutex<VecDeque<Notification>>,
}

impl ToastFeed {
    fn new() -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            tx,
            backlog: Mutex::new(VecDeque::with_capacity(BACKLOG_LEN)),
        }
    }

    fn publish(&self, notification: Notification) {
        let Ok(mut backlog) = self.backlog.lock() else {
            warn!("Toast backlog lock poisoned, dropping toast");
            return;
        };
        if backlog.len() == BACKLOG_LEN {
            backlog.pop_front();
        }
        backlog.push_back(notification.clone());
        // Err only means nobody is connected right now.
        let receivers = self.tx.send(notification).unwrap_or(0);
        debug!(receivers, backlog = backlog.len(), "Toast published");
    }

    fn subscribe(&self) -> (Vec<Notification>, broadcast::Receiver<Notification>) {
        let Ok(backlog) = self.backlog.lock() else {
            return (Vec::new(), self.tx.subscribe());
        };
        (backlog.iter().cloned().collect(), self.tx.subscribe())
    }
}

/// A [`Notifier`] that logs each toast and publishes it to the toast feed.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    feed: Arc<ToastFeed>,
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, notification: Notification) {
        TracingNotifier.notify(notification.clone());
        self.feed.publish(notification);
    }
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
pub struct AppState {
    /// The stores. Each handler holds the lock for one store operation.
    pub app: RwLock<App>,
    feed: Arc<ToastFeed>,
}

impl AppState {
    /// Build the stores from configuration, wired to a fresh toast feed.
    ///
    /// # Errors
    ///
    /// Propagates [`CoreError`] from [`App::from_config`].
    pub fn from_config(config: &EventMapConfig) -> Result<Self, CoreError> {
        let feed = Arc::new(ToastFeed::new());
        let notifier: Arc<dyn Notifier> = Arc::new(BroadcastNotifier {
            feed: Arc::clone(&feed),
        });
        let app = App::from_config(config, notifier)?;
        Ok(Self {
            app: RwLock::new(app),
            feed,
        })
    }

    /// Subscribe to live toasts.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.feed.tx.subscribe()
    }

    /// The most recent toasts (oldest first, at most [`BACKLOG_LEN`])
    /// together with a receiver for every toast after them.
    pub fn subscribe_with_backlog(&self) -> (Vec<Notification>, broadcast::Receiver<Notification>) {
        self.feed.subscribe()
    }
}

impl core::fmt::Debug for AppState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppState")
            .field("subscribers", &self.feed.tx.receiver_count())
            .finish_non_exhaustive()
    }
}
