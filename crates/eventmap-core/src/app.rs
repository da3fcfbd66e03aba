//! Application composition root.
//!
//! [`App`] is built once at startup and owns one instance of each store.
//! Views receive it by reference (or behind a lock, in the server) rather
//! than reaching for globals. The stores never talk to each other; the
//! few operations that need more than one of them live here.

use std::sync::Arc;

use eventmap_types::{Event, EventId, Notification};
use serde::Serialize;
use tracing::{debug, info};

use crate::auth::MockAuthenticator;
use crate::catalog::CatalogStore;
use crate::config::{EventMapConfig, ShareConfig};
use crate::error::CoreError;
use crate::form::EventForm;
use crate::id_gen;
use crate::notify::Notifier;
use crate::session::SessionStore;
use crate::share::{self, Clipboard, ShareOutcome, ShareTarget};
use crate::viewport::ViewportStore;

/// A screen the view layer can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "id", rename_all = "snake_case")]
pub enum Route {
    /// The map with the event list.
    Home,
    /// Detail screen of one event.
    Event(EventId),
    /// The creation form.
    Create,
    /// The signed-in user's profile.
    Profile,
    /// The about page.
    About,
}

impl Route {
    /// The client-side path for this screen.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Event(id) => format!("/event/{id}"),
            Self::Create => "/create".to_owned(),
            Self::Profile => "/profile".to_owned(),
            Self::About => "/about".to_owned(),
        }
    }
}

/// Result of a successful event creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedEvent {
    /// The stored event.
    pub event: Event,
    /// Where the view should go next.
    pub redirect: Route,
}

/// The three stores plus the shared toast sink.
pub struct App {
    session: SessionStore,
    catalog: CatalogStore,
    viewport: ViewportStore,
    notifier: Arc<dyn Notifier>,
    public_url: String,
    tile_url: String,
    share: ShareConfig,
}

impl core::fmt::Debug for App {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("catalog", &self.catalog)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Build every store from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSeedDate`] if demo seeding fails.
    pub fn from_config(config: &EventMapConfig, notifier: Arc<dyn Notifier>) -> Result<Self, CoreError> {
        let session = SessionStore::new(
            Box::new(MockAuthenticator::new(config.auth.premium_marker.clone())),
            Arc::clone(&notifier),
        );

        let ids = id_gen::from_strategy(config.catalog.id_strategy);
        let catalog = if config.catalog.seed_demo_data {
            CatalogStore::seeded(ids, Arc::clone(&notifier))?
        } else {
            CatalogStore::new(ids, Arc::clone(&notifier))
        };

        let viewport = ViewportStore::new(&config.map);

        info!(
            events = catalog.len(),
            id_strategy = ?config.catalog.id_strategy,
            "Application stores initialized"
        );

        Ok(Self {
            session,
            catalog,
            viewport,
            notifier,
            public_url: config.server.public_url.clone(),
            tile_url: config.map.tile_url.clone(),
            share: config.share.clone(),
        })
    }

    // -------------------------------------------------------------------
    // Store access
    // -------------------------------------------------------------------

    /// The session store.
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The session store, mutably.
    pub const fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    /// The catalog store.
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The catalog store, mutably.
    pub const fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    /// The viewport store.
    pub const fn viewport(&self) -> &ViewportStore {
        &self.viewport
    }

    /// The viewport store, mutably.
    pub const fn viewport_mut(&mut self) -> &mut ViewportStore {
        &mut self.viewport
    }

    // -------------------------------------------------------------------
    // View operations
    // -------------------------------------------------------------------

    /// Open the detail screen of `id` and focus the map on it.
    ///
    /// `None` means the id is unknown and the view should redirect to
    /// [`Route::Home`]; the viewport is left untouched in that case.
    pub fn open_event(&mut self, id: &EventId) -> Option<&Event> {
        let Some(event) = self.catalog.get(id) else {
            debug!(event_id = %id, "Unknown event, redirecting home");
            return None;
        };
        self.viewport.focus(event);
        Some(event)
    }

    /// Select an event on the map (or clear the selection).
    pub fn select_event(&mut self, id: Option<EventId>) {
        self.viewport.set_selected(id);
    }

    /// The selected event, if the selection still resolves.
    pub fn selected_event(&self) -> Option<&Event> {
        self.viewport.selected(&self.catalog)
    }

    /// Create an event from the creation form as the signed-in user.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotAuthenticated`] when nobody is signed in.
    /// - [`CoreError::Validation`] when required fields are missing; a
    ///   blocking toast is shown and nothing is stored.
    pub fn create_event(&mut self, form: EventForm) -> Result<CreatedEvent, CoreError> {
        let Some(user) = self.session.current_user() else {
            return Err(CoreError::NotAuthenticated);
        };

        let draft = match form.into_draft() {
            Ok(draft) => draft,
            Err(e) => {
                debug!(error = %e, "Event form rejected");
                self.notifier.notify(Notification::destructive(
                    "Внимание",
                    "Заполните все обязательные поля.",
                ));
                return Err(e);
            }
        };

        let event = self.catalog.create(draft, Some(user));
        Ok(CreatedEvent {
            event,
            redirect: Route::Home,
        })
    }

    /// Events organized by the signed-in user; empty when signed out.
    pub fn my_events(&self) -> Vec<&Event> {
        self.session
            .current_user()
            .map(|user| self.catalog.events_by_organizer(&user.id))
            .unwrap_or_default()
    }

    /// Raster tile URL template for the map view.
    pub fn tile_url(&self) -> &str {
        &self.tile_url
    }

    /// Absolute link to the detail screen of `id`.
    pub fn event_url(&self, id: &EventId) -> String {
        share::event_url(&self.public_url, &self.share.event_path, id)
    }

    /// Share the event `id`. `None` when the id is unknown.
    pub fn share_event(
        &self,
        id: &EventId,
        native: Option<&dyn ShareTarget>,
        clipboard: &dyn Clipboard,
    ) -> Option<ShareOutcome> {
        let event = self.catalog.get(id)?;
        let url = self.event_url(id);
        Some(share::share_event(
            event,
            &url,
            native,
            clipboard,
            self.notifier.as_ref(),
        ))
    }
}
