//! Core entity structs: events, users, filters, the map viewport and
//! toast notifications.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{EventCategory, Severity};
use crate::ids::{EventId, UserId};

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A map coordinate in longitude-first order, as the map camera expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LngLat {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl LngLat {
    /// Build a coordinate from a longitude and a latitude.
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(point: LngLat) -> Self {
        [point.lng, point.lat]
    }
}

/// Where an event takes place. All three parts are required together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventLocation {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Human-readable venue or street address.
    pub address: String,
}

impl EventLocation {
    /// The location as a longitude-first map coordinate.
    pub const fn to_lng_lat(&self) -> LngLat {
        LngLat::new(self.lng, self.lat)
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// An event in the catalog.
///
/// Events are created once and never edited or removed; the id is unique
/// within the catalog for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Short title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Venue coordinates and address.
    pub location: EventLocation,
    /// Calendar date the event takes place on.
    pub date: NaiveDate,
    /// Start time of day as entered by the organizer (`HH:MM`).
    pub time: String,
    /// Category the event is listed under.
    pub category: EventCategory,
    /// Identifier of the organizing user.
    pub organizer_id: UserId,
    /// Display name of the organizer.
    pub organizer: String,
    /// Optional cover image URL.
    pub image_url: Option<String>,
    /// Whether this is a premium listing.
    pub is_premium: bool,
    /// Number of registered attendees.
    pub attendees: u32,
}

impl Event {
    /// Materialize a draft into a catalog event with zero attendees.
    pub fn from_draft(id: EventId, draft: EventDraft, organizer: Organizer) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            location: draft.location,
            date: draft.date,
            time: draft.time,
            category: draft.category,
            organizer_id: organizer.id,
            organizer: organizer.name,
            image_url: draft.image_url,
            is_premium: draft.is_premium,
            attendees: 0,
        }
    }
}

/// Everything the creator supplies for a new event. The catalog assigns
/// the id, the organizer fields and the attendee count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventDraft {
    /// Short title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Venue coordinates and address.
    pub location: EventLocation,
    /// Calendar date.
    pub date: NaiveDate,
    /// Start time of day (`HH:MM`).
    pub time: String,
    /// Category.
    pub category: EventCategory,
    /// Optional cover image URL.
    pub image_url: Option<String>,
    /// Whether this is a premium listing.
    pub is_premium: bool,
}

/// The identity attached to a newly created event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Organizer {
    /// Organizer user id.
    pub id: UserId,
    /// Organizer display name.
    pub name: String,
}

impl Organizer {
    /// Stand-in organizer used when an event is created without a session.
    ///
    /// Views gate creation on authentication, so this only shows up when a
    /// caller skips that check.
    pub fn placeholder() -> Self {
        Self {
            id: UserId::from("user-1"),
            name: String::from("Current User"),
        }
    }
}

impl From<&User> for Organizer {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// The signed-in user. At most one exists per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address used to sign in.
    pub email: String,
    /// Whether the user has a premium subscription.
    pub is_premium: bool,
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// An inclusive date range. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DateRange {
    /// First date included, if bounded.
    pub start: Option<NaiveDate>,
    /// Last date included, if bounded.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// The fully open range.
    pub const UNBOUNDED: Self = Self {
        start: None,
        end: None,
    };

    /// Build a range from optional bounds.
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls within the range, both bounds inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    /// Whether neither bound is set.
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether both bounds are set.
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Advance the two-click range picker with a newly picked date.
    ///
    /// The first pick sets the start. A later pick sets the end, unless it
    /// is earlier than the start, in which case the selection restarts at
    /// the picked date.
    #[must_use]
    pub fn pick(self, date: NaiveDate) -> Self {
        match self.start {
            None => Self::new(Some(date), None),
            Some(start) if date < start => Self::new(Some(date), None),
            Some(start) => Self::new(Some(start), Some(date)),
        }
    }
}

/// The active catalog filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FilterState {
    /// Category to match; `None` matches every category.
    pub category: Option<EventCategory>,
    /// Date range to match.
    pub date_range: DateRange,
}

impl FilterState {
    /// Build a filter from a category selector and a date range.
    pub const fn new(category: Option<EventCategory>, date_range: DateRange) -> Self {
        Self {
            category,
            date_range,
        }
    }

    /// Whether the filter lets every event through.
    pub const fn is_empty(&self) -> bool {
        self.category.is_none() && self.date_range.is_unbounded()
    }

    /// Whether `event` passes the category selector and the date range.
    pub fn matches(&self, event: &Event) -> bool {
        self.category.is_none_or(|c| c == event.category) && self.date_range.contains(event.date)
    }

    /// Select `category`, or clear the selector when it is already active.
    #[must_use]
    pub fn toggle_category(self, category: EventCategory) -> Self {
        let category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
        Self { category, ..self }
    }
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// The map camera and selection state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Viewport {
    /// Map center.
    pub center: LngLat,
    /// Zoom level.
    pub zoom: u8,
    /// Whether the map surface is initialized and interactive.
    pub loaded: bool,
    /// Weak reference to the selected event; may no longer resolve.
    pub selected_event: Option<EventId>,
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// A transient toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Notification {
    /// Bold first line.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Visual weight.
    pub severity: Severity,
}

impl Notification {
    /// An informational toast.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    /// An error toast.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}
