//! Shared type definitions for the EventMap application.
//!
//! This crate is the single source of truth for the data model shared by
//! the stores in `eventmap-core` and the view API in `eventmap-server`.
//! Types flow downstream to `TypeScript` via `ts-rs` for the browser views.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe string wrappers for event and user identifiers
//! - [`enums`] -- Event categories and toast severity
//! - [`structs`] -- Events, users, filters, viewport and notifications

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{EventCategory, Severity, UnknownCategory};
pub use ids::{EventId, UserId};
pub use structs::{
    DateRange, Event, EventDraft, EventLocation, FilterState, LngLat, Notification, Organizer,
    User, Viewport,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs writes the files to `bindings/` relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::EventId::export_all();
        let _ = crate::ids::UserId::export_all();

        // Enums
        let _ = crate::enums::EventCategory::export_all();
        let _ = crate::enums::Severity::export_all();

        // Structs
        let _ = crate::structs::LngLat::export_all();
        let _ = crate::structs::EventLocation::export_all();
        let _ = crate::structs::Event::export_all();
        let _ = crate::structs::EventDraft::export_all();
        let _ = crate::structs::Organizer::export_all();
        let _ = crate::structs::User::export_all();
        let _ = crate::structs::DateRange::export_all();
        let _ = crate::structs::FilterState::export_all();
        let _ = crate::structs::Viewport::export_all();
        let _ = crate::structs::Notification::export_all();
    }
}
