//! Sharing an event link.
//!
//! Sharing is best-effort. The platform share sheet is tried first; when
//! it is missing or fails, the link is copied to the clipboard and a toast
//! tells the user. Nothing here touches store state.

use eventmap_types::{Event, EventId, Notification};
use serde::Serialize;
use tracing::{debug, warn};

use crate::notify::Notifier;

/// Failure reported by a share or clipboard collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ShareError(pub String);

/// What gets handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    /// Event title.
    pub title: String,
    /// Event description.
    pub text: String,
    /// Link to the event detail screen.
    pub url: String,
}

/// A native share sheet.
pub trait ShareTarget {
    /// Offer `request` to the user.
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// A system clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// How a share attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareOutcome {
    /// The share sheet accepted the link.
    Shared,
    /// The link was copied to the clipboard instead.
    Copied,
    /// Neither route worked.
    Unavailable,
}

/// Build the absolute link to an event detail screen.
pub fn event_url(public_url: &str, event_path: &str, id: &EventId) -> String {
    format!(
        "{}/{}/{id}",
        public_url.trim_end_matches('/'),
        event_path.trim_matches('/')
    )
}

/// Share `event` at `url`, falling back to the clipboard.
pub fn share_event(
    event: &Event,
    url: &str,
    native: Option<&dyn ShareTarget>,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
) -> ShareOutcome {
    if let Some(target) = native {
        let request = ShareRequest {
            title: event.title.clone(),
            text: event.description.clone(),
            url: url.to_owned(),
        };
        match target.share(&request) {
            Ok(()) => {
                debug!(event_id = %event.id, "Shared via native share sheet");
                return ShareOutcome::Shared;
            }
            Err(e) => debug!(event_id = %event.id, error = %e, "Native share failed"),
        }
    }

    match clipboard.write_text(url) {
        Ok(()) => {
            notifier.notify(Notification::info(
                "Ссылка скопирована",
                "Теперь вы можете поделиться этим с другими.",
            ));
            ShareOutcome::Copied
        }
        Err(e) => {
            warn!(event_id = %event.id, error = %e, "Clipboard unavailable");
            ShareOutcome::Unavailable
        }
    }
}
