//! Viewport store: map camera, loaded flag and selection.
//!
//! The store only records state. The map view observes it and moves the
//! camera; the map view in turn reports user panning back through
//! [`ViewportStore::map_moved`] so the two never drift apart.
//!
//! The `loaded` flag has exactly two transitions: [`ViewportStore::map_ready`]
//! when the map surface finishes initializing, and
//! [`ViewportStore::map_teardown`] when it unmounts.

use eventmap_types::{Event, EventId, LngLat, Viewport};
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::config::MapConfig;

/// Owns the map camera and the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportStore {
    state: Viewport,
    fly_to_zoom: u8,
    focus_zoom: u8,
}

impl ViewportStore {
    /// Create a viewport from map configuration: not loaded, nothing selected.
    pub fn new(config: &MapConfig) -> Self {
        Self {
            state: Viewport {
                center: config.center(),
                zoom: config.default_zoom,
                loaded: false,
                selected_event: None,
            },
            fly_to_zoom: config.fly_to_zoom,
            focus_zoom: config.focus_zoom,
        }
    }

    /// A snapshot of the full viewport state.
    pub const fn state(&self) -> &Viewport {
        &self.state
    }

    /// Current map center.
    pub const fn center(&self) -> LngLat {
        self.state.center
    }

    /// Current zoom level.
    pub const fn zoom(&self) -> u8 {
        self.state.zoom
    }

    /// Whether the map surface is ready.
    pub const fn is_loaded(&self) -> bool {
        self.state.loaded
    }

    /// Id of the selected event, whether or not it still resolves.
    pub const fn selected_id(&self) -> Option<&EventId> {
        self.state.selected_event.as_ref()
    }

    // -------------------------------------------------------------------
    // Setters
    // -------------------------------------------------------------------

    /// Replace the map center.
    pub const fn set_center(&mut self, center: LngLat) {
        self.state.center = center;
    }

    /// Replace the zoom level.
    pub const fn set_zoom(&mut self, zoom: u8) {
        self.state.zoom = zoom;
    }

    /// Replace the loaded flag.
    pub const fn set_loaded(&mut self, loaded: bool) {
        self.state.loaded = loaded;
    }

    /// Select an event by id, or clear the selection with `None`.
    pub fn set_selected(&mut self, id: Option<EventId>) {
        debug!(event_id = id.as_ref().map(EventId::as_str), "Selection changed");
        self.state.selected_event = id;
    }

    // -------------------------------------------------------------------
    // Conveniences
    // -------------------------------------------------------------------

    /// Move the camera to `center`, at `zoom` or the configured fly-to zoom.
    ///
    /// Only state is updated; animating the transition is up to the map view.
    pub fn fly_to(&mut self, center: LngLat, zoom: Option<u8>) {
        let zoom = zoom.unwrap_or(self.fly_to_zoom);
        debug!(lng = center.lng, lat = center.lat, zoom, "Fly to");
        self.state.center = center;
        self.state.zoom = zoom;
    }

    /// Center the map on `event` at the detail-screen zoom.
    pub fn focus(&mut self, event: &Event) {
        self.fly_to(event.location.to_lng_lat(), Some(self.focus_zoom));
    }

    /// Record a camera change made by the user on the map.
    pub const fn map_moved(&mut self, center: LngLat, zoom: u8) {
        self.state.center = center;
        self.state.zoom = zoom;
    }

    /// The map surface finished initializing.
    pub const fn map_ready(&mut self) {
        self.state.loaded = true;
    }

    /// The map surface is being torn down.
    pub const fn map_teardown(&mut self) {
        self.state.loaded = false;
    }

    /// Resolve the selection against `catalog`.
    ///
    /// A selection whose event no longer exists resolves to `None`.
    pub fn selected<'a>(&self, catalog: &'a CatalogStore) -> Option<&'a Event> {
        self.state
            .selected_event
            .as_ref()
            .and_then(|id| catalog.get(id))
    }
}

impl Default for ViewportStore {
    fn default() -> Self {
        Self::new(&MapConfig::default())
    }
}
