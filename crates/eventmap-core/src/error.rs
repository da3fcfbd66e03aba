//! Error types for the `eventmap-core` crate.
//!
//! Store operations themselves cannot fail: empty credentials are a
//! no-op and an unknown id resolves to `None`. The errors below come from
//! the view-level operations on [`App`](crate::app::App) and from startup.

use crate::config::ConfigError;

/// Errors surfaced by view-level operations and application startup.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Event creation was attempted without a signed-in user.
    #[error("sign in to create events")]
    NotAuthenticated,

    /// The creation form is missing required fields.
    #[error("missing required fields: {}", fields.join(", "))]
    Validation {
        /// Names of the offending form fields, sorted.
        fields: Vec<String>,
    },

    /// A built-in seed event carries an impossible calendar date.
    #[error("invalid seed date {year:04}-{month:02}-{day:02}")]
    InvalidSeedDate {
        /// Year.
        year: i32,
        /// Month (1-12).
        month: u32,
        /// Day of month.
        day: u32,
    },

    /// Configuration could not be loaded.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },
}
