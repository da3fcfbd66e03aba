//! Catalog store: the authoritative event set and the active filter.
//!
//! The filtered view is never stored. [`CatalogStore::filtered`] evaluates
//! the active [`FilterState`] against the full set on every call, so it
//! cannot go stale after a create or a filter change, and applying the
//! same filter twice yields the same view.

use std::sync::Arc;

use eventmap_types::{
    Event, EventCategory, EventDraft, EventId, FilterState, Notification, Organizer, User, UserId,
};
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::id_gen::{IdGenerator, UuidIdGenerator};
use crate::notify::Notifier;
use crate::seed;

/// How many clashing proposals the catalog tolerates from its generator
/// before it falls back to a UUID id.
const MAX_ID_ATTEMPTS: usize = 32;

/// Owns every event and the active filter.
pub struct CatalogStore {
    /// Full event set in insertion order.
    events: Vec<Event>,
    /// Filter applied by [`CatalogStore::filtered`].
    filter: FilterState,
    ids: Box<dyn IdGenerator>,
    notifier: Arc<dyn Notifier>,
}

impl core::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("events", &self.events.len())
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl CatalogStore {
    /// Create an empty catalog.
    pub fn new(ids: Box<dyn IdGenerator>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_events(Vec::new(), ids, notifier)
    }

    /// Create a catalog holding `events` in the given order.
    pub fn with_events(
        events: Vec<Event>,
        ids: Box<dyn IdGenerator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            events,
            filter: FilterState::default(),
            ids,
            notifier,
        }
    }

    /// Create a catalog seeded with the demo events.
    pub fn seeded(ids: Box<dyn IdGenerator>, notifier: Arc<dyn Notifier>) -> Result<Self, CoreError> {
        let events = seed::demo_events()?;
        info!(count = events.len(), "Catalog seeded with demo events");
        Ok(Self::with_events(events, ids, notifier))
    }

    // -------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------

    /// Every event, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events in the catalog.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The selectable categories in display order.
    #[allow(clippy::unused_self)]
    pub const fn categories(&self) -> &'static [EventCategory] {
        &EventCategory::ALL
    }

    /// Look up an event by id.
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Whether an event with `id` exists.
    pub fn contains(&self, id: &EventId) -> bool {
        self.get(id).is_some()
    }

    /// The filter currently in effect.
    pub const fn active_filter(&self) -> &FilterState {
        &self.filter
    }

    /// Events passing the active filter, in insertion order.
    pub fn filtered(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| self.filter.matches(e))
            .collect()
    }

    /// Events organized by `user_id`, in insertion order.
    pub fn events_by_organizer(&self, user_id: &UserId) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| &e.organizer_id == user_id)
            .collect()
    }

    // -------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------

    /// Add a new event built from `draft`.
    ///
    /// The catalog assigns a fresh id, takes the organizer from `organizer`
    /// (or a placeholder when `None`) and starts the attendee count at
    /// zero. No validation happens here; callers check required fields.
    /// Returns a copy of the stored event.
    pub fn create(&mut self, draft: EventDraft, organizer: Option<&User>) -> Event {
        let id = self.fresh_id();
        let organizer = organizer.map_or_else(Organizer::placeholder, Organizer::from);
        let event = Event::from_draft(id, draft, organizer);

        info!(
            event_id = %event.id,
            category = %event.category,
            organizer_id = %event.organizer_id,
            "Event created"
        );
        self.notifier.notify(Notification::info(
            "Событие создано",
            "Ваше событие успешно создано.",
        ));

        self.events.push(event.clone());
        event
    }

    /// Replace the active filter and return how many events now match.
    pub fn apply_filter(&mut self, filter: FilterState) -> usize {
        self.filter = filter;
        let matched = self.events.iter().filter(|e| filter.matches(e)).count();
        debug!(
            category = ?filter.category,
            start = ?filter.date_range.start,
            end = ?filter.date_range.end,
            matched,
            "Filter applied"
        );
        matched
    }

    /// Drop the active filter so every event is visible again.
    pub fn clear_filter(&mut self) -> usize {
        self.apply_filter(FilterState::default())
    }

    /// Ask the generator for ids until one is unused.
    fn fresh_id(&mut self) -> EventId {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_event_id(self.events.len());
            if !self.contains(&candidate) {
                return candidate;
            }
            warn!(event_id = %candidate, "Id generator proposed an id already in use");
        }
        let mut fallback = UuidIdGenerator;
        fallback.next_event_id(self.events.len())
    }
}
