//! Enumeration types for the event catalog and notifications.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Event categories
// ---------------------------------------------------------------------------

/// The fixed set of categories an event can belong to.
///
/// Serialized as the display labels shown in the category picker, so the
/// wire value and the UI label are the same string. `Art` keeps the
/// historical spelling `Исскуство`; existing clients filter on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum EventCategory {
    /// Sports and games.
    #[serde(rename = "Спорт")]
    Sport,
    /// Concerts and festivals.
    #[serde(rename = "Музыка")]
    Music,
    /// Business meetups and conferences.
    #[serde(rename = "Бизнес")]
    Business,
    /// Exhibitions and galleries.
    #[serde(rename = "Исскуство")]
    Art,
    /// Technology and startups.
    #[serde(rename = "Технологии")]
    Technology,
    /// Food festivals and tastings.
    #[serde(rename = "Еда")]
    Food,
    /// Lectures and workshops.
    #[serde(rename = "Образование")]
    Education,
    /// Health and wellbeing.
    #[serde(rename = "Здоровье")]
    Health,
    /// Social gatherings.
    #[serde(rename = "Социальные")]
    Social,
}

impl EventCategory {
    /// Every category in picker display order.
    pub const ALL: [Self; 9] = [
        Self::Sport,
        Self::Music,
        Self::Business,
        Self::Art,
        Self::Technology,
        Self::Food,
        Self::Education,
        Self::Health,
        Self::Social,
    ];

    /// The display label, identical to the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sport => "Спорт",
            Self::Music => "Музыка",
            Self::Business => "Бизнес",
            Self::Art => "Исскуство",
            Self::Technology => "Технологии",
            Self::Food => "Еда",
            Self::Education => "Образование",
            Self::Health => "Здоровье",
            Self::Social => "Социальные",
        }
    }
}

impl core::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A category label that matches none of the [`EventCategory`] variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event category: {0}")]
pub struct UnknownCategory(pub String);

impl core::str::FromStr for EventCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == trimmed)
            .ok_or_else(|| UnknownCategory(trimmed.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Notification severity
// ---------------------------------------------------------------------------

/// Visual weight of a toast notification.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Severity {
    /// Informational toast.
    #[default]
    Default,
    /// Error or blocking validation toast.
    Destructive,
}
