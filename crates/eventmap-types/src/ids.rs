//! Type-safe identifier wrappers around [`String`].
//!
//! Events and users are addressed by opaque string identifiers
//! (`event-3`, `user-1`, ...). Each gets its own newtype so an event id
//! can never be passed where a user id is expected. The ids carry no
//! structure the application relies on: generation is delegated to the
//! id generator and authenticator collaborators in `eventmap-core`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Wrap an existing identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner [`String`] value.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for an event in the catalog.
    EventId
}

define_id! {
    /// Unique identifier for a signed-in user.
    UserId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = EventId::from("event-7");
        let json = serde_json::to_string(&id).ok();
        assert_eq!(json.as_deref(), Some("\"event-7\""));

        let back: Option<UserId> = serde_json::from_str("\"user-1\"").ok();
        assert_eq!(back, Some(UserId::new("user-1")));
    }

    #[test]
    fn display_matches_inner_value() {
        let id = EventId::new(String::from("event-1"));
        assert_eq!(id.to_string(), "event-1");
        assert_eq!(id.as_str(), "event-1");
    }
}
