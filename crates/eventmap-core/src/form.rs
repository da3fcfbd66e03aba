//! Event creation form.
//!
//! The catalog performs no validation of its own, so required fields are
//! checked here before a draft ever reaches
//! [`CatalogStore::create`](crate::catalog::CatalogStore::create).
//! Required: title, description, address and category.

use chrono::NaiveDate;
use eventmap_types::{EventCategory, EventDraft, EventLocation};
use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Raw inputs of the creation form.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct EventForm {
    /// Event title.
    #[validate(length(min = 1))]
    pub title: String,

    /// Event description.
    #[validate(length(min = 1))]
    pub description: String,

    /// Venue address.
    #[validate(length(min = 1))]
    pub address: String,

    /// Venue latitude; defaults to central Moscow.
    #[serde(default = "default_lat")]
    pub lat: f64,

    /// Venue longitude; defaults to central Moscow.
    #[serde(default = "default_lng")]
    pub lng: f64,

    /// Event date.
    pub date: NaiveDate,

    /// Start time (`HH:MM`).
    #[serde(default = "default_time")]
    pub time: String,

    /// Selected category, if one was picked.
    #[serde(default)]
    #[validate(required)]
    pub category: Option<EventCategory>,

    /// Cover image URL; blank means none.
    #[serde(default)]
    pub image_url: Option<String>,

    /// Premium listing flag.
    #[serde(default)]
    pub is_premium: bool,
}

impl EventForm {
    /// A blank form for `date` with the default venue coordinates and time.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            address: String::new(),
            lat: default_lat(),
            lng: default_lng(),
            date,
            time: default_time(),
            category: None,
            image_url: None,
            is_premium: false,
        }
    }

    /// Names of the required fields that are missing, sorted.
    pub fn missing_fields(&self) -> Vec<String> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(ToString::to_string)
            .collect();
        fields.sort();
        fields
    }

    /// Check required fields and turn the form into a catalog draft.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming every missing field.
    pub fn into_draft(self) -> Result<EventDraft, CoreError> {
        let missing = self.missing_fields();
        let Some(category) = self.category.filter(|_| missing.is_empty()) else {
            return Err(CoreError::Validation { fields: missing });
        };
        Ok(EventDraft {
            title: self.title,
            description: self.description,
            location: EventLocation {
                lat: self.lat,
                lng: self.lng,
                address: self.address,
            },
            date: self.date,
            time: self.time,
            category,
            image_url: self.image_url.filter(|url| !url.trim().is_empty()),
            is_premium: self.is_premium,
        })
    }
}

const fn default_lat() -> f64 {
    55.7558
}

const fn default_lng() -> f64 {
    37.6176
}

fn default_time() -> String {
    "12:00".to_owned()
}
