//! Toast notification sink.
//!
//! Store operations report their outcome to the user through a
//! [`Notifier`]. Delivery is fire-and-forget: the sink never returns a
//! value and never fails from the caller's point of view, so a store
//! mutation cannot be rolled back by a display problem.

use std::sync::Mutex;

use eventmap_types::{Notification, Severity};

/// A fire-and-forget sink for user-facing toasts.
pub trait Notifier: Send + Sync {
    /// Show `notification` to the user.
    fn notify(&self, notification: Notification);
}

/// Writes every toast to the log and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Default => tracing::info!(
                title = %notification.title,
                description = %notification.description,
                "toast"
            ),
            Severity::Destructive => tracing::warn!(
                title = %notification.title,
                description = %notification.description,
                "toast"
            ),
        }
    }
}

/// Keeps every toast in memory, oldest first.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    history: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every toast received so far.
    pub fn history(&self) -> Vec<Notification> {
        self.history
            .lock()
            .map(|h| h.clone())
            .unwrap_or_default()
    }

    /// The most recent toast, if any.
    pub fn last(&self) -> Option<Notification> {
        self.history.lock().ok().and_then(|h| h.last().cloned())
    }

    /// Number of toasts received.
    pub fn len(&self) -> usize {
        self.history.lock().map(|h| h.len()).unwrap_or(0)
    }

    /// Whether no toast has been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        // A poisoned lock only means another thread panicked mid-push;
        // the history is still usable.
        let mut history = match self.history.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        history.push(notification);
    }
}
