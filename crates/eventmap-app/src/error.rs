//! Error types for the EventMap binary.
//!
//! [`AppError`] is the top-level error type that wraps all possible
//! failure modes during startup and serving.

/// Top-level error for the EventMap binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: eventmap_core::config::ConfigError,
    },

    /// Store construction failed.
    #[error("store error: {source}")]
    Core {
        /// The underlying store error.
        #[from]
        source: eventmap_core::CoreError,
    },

    /// The view API server failed.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: eventmap_server::ServerError,
    },
}
