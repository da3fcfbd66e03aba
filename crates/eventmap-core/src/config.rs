//! Configuration loading and typed config structures for EventMap.
//!
//! The configuration lives in `eventmap-config.yaml` next to the binary's
//! working directory. Every field has a default, so a missing file or an
//! empty document yields a working setup: the view API on port 8080, the
//! map centered on Moscow, and the demo catalog seeded.

use std::path::Path;

use eventmap_types::LngLat;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level application configuration.
///
/// Mirrors the structure of `eventmap-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventMapConfig {
    /// View API bind address.
    #[serde(default)]
    pub server: ServerSettings,

    /// Map camera defaults.
    #[serde(default)]
    pub map: MapConfig,

    /// Catalog seeding and id assignment.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Placeholder authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Share link settings.
    #[serde(default)]
    pub share: ShareConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EventMapConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `EVENTMAP_HOST` and `EVENTMAP_PORT` override the server section when
    /// set.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty map.
        if yaml.trim().is_empty() {
            let mut config = Self::default();
            config.server.apply_env_overrides();
            return Ok(config);
        }
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            let mut config = Self::default();
            config.server.apply_env_overrides();
            Ok(config)
        }
    }
}

/// View API bind address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Public origin used to build shareable event links.
    #[serde(default = "default_public_url")]
    pub public_url: String,
}

impl ServerSettings {
    /// Override the bind address with environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("EVENTMAP_HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("EVENTMAP_PORT") {
            match val.parse() {
                Ok(port) => self.port = port,
                Err(e) => tracing::warn!(value = %val, error = %e, "Ignoring invalid EVENTMAP_PORT"),
            }
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_url: default_public_url(),
        }
    }
}

/// Map camera defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapConfig {
    /// Initial center as `[lng, lat]`.
    #[serde(default = "default_center")]
    pub default_center: [f64; 2],

    /// Initial zoom level.
    #[serde(default = "default_zoom")]
    pub default_zoom: u8,

    /// Zoom used by fly-to when the caller gives none.
    #[serde(default = "default_fly_to_zoom")]
    pub fly_to_zoom: u8,

    /// Zoom used when an event detail screen focuses the map.
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: u8,

    /// Raster tile URL template handed to the map view.
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
}

impl MapConfig {
    /// The configured initial center as a coordinate.
    pub fn center(&self) -> LngLat {
        LngLat::from(self.default_center)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: default_center(),
            default_zoom: default_zoom(),
            fly_to_zoom: default_fly_to_zoom(),
            focus_zoom: default_focus_zoom(),
            tile_url: default_tile_url(),
        }
    }
}

/// How new event identifiers are assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `event-<n>` where `n` follows the catalog size.
    #[default]
    Sequential,
    /// `event-<uuid v7>`.
    Uuid,
}

/// Catalog seeding and id assignment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Seed the five demo events at startup.
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,

    /// Id assignment strategy for created events.
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            id_strategy: IdStrategy::default(),
        }
    }
}

/// Placeholder authentication settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthConfig {
    /// Substring of the email that marks a user as premium.
    #[serde(default = "default_premium_marker")]
    pub premium_marker: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            premium_marker: default_premium_marker(),
        }
    }
}

/// Share link settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShareConfig {
    /// Path prefix of the event detail screen.
    #[serde(default = "default_event_path")]
    pub event_path: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            event_path: default_event_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

fn default_public_url() -> String {
    "http://localhost:8080".to_owned()
}

const fn default_center() -> [f64; 2] {
    [37.6176, 55.7558]
}

const fn default_zoom() -> u8 {
    12
}

const fn default_fly_to_zoom() -> u8 {
    14
}

const fn default_focus_zoom() -> u8 {
    15
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_owned()
}

fn default_premium_marker() -> String {
    "premium".to_owned()
}

fn default_event_path() -> String {
    "/event".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EventMapConfig::default();
        assert_eq!(config.map.default_zoom, 12);
        assert_eq!(config.map.fly_to_zoom, 14);
        assert_eq!(config.map.focus_zoom, 15);
        assert!(config.catalog.seed_demo_data);
        assert_eq!(config.catalog.id_strategy, IdStrategy::Sequential);
        assert_eq!(config.auth.premium_marker, "premium");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9090
  public_url: "https://events.example.org"

map:
  default_center: [30.3141, 59.9386]
  default_zoom: 11
  fly_to_zoom: 13
  focus_zoom: 16
  tile_url: "https://tiles.example.org/{z}/{x}/{y}.png"

catalog:
  seed_demo_data: false
  id_strategy: uuid

auth:
  premium_marker: "vip"

share:
  event_path: "/events"

logging:
  level: "debug"
  json: true
"#;

        let config = EventMapConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.map.default_zoom, 11);
        assert_eq!(config.map.focus_zoom, 16);
        assert!(!config.catalog.seed_demo_data);
        assert_eq!(config.catalog.id_strategy, IdStrategy::Uuid);
        assert_eq!(config.auth.premium_marker, "vip");
        assert_eq!(config.share.event_path, "/events");
        assert_eq!(config.server.public_url, "https://events.example.org");
        assert!(config.logging.json);
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "map:\n  default_zoom: 9\n";
        let config = EventMapConfig::parse(yaml).ok().unwrap_or_default();

        assert_eq!(config.map.default_zoom, 9);
        // Everything else uses defaults
        assert_eq!(config.map.fly_to_zoom, 14);
        assert!(config.catalog.seed_demo_data);
    }

    #[test]
    fn parse_empty_yaml() {
        assert!(EventMapConfig::parse("").is_ok());
    }

    #[test]
    fn parse_rejects_unknown_id_strategy() {
        let yaml = "catalog:\n  id_strategy: random\n";
        assert!(matches!(
            EventMapConfig::parse(yaml),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("eventmap-config.yaml");
        if path.exists() {
            let config = EventMapConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
