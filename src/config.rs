//! Configuration management for Snaplink.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration for the Snaplink utility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnaplinkConfig {
    /// Shortener endpoint configuration
    #[serde(default)]
    pub shortener: ShortenerConfig,

    /// Transaction journal configuration
    #[serde(default)]
    pub journal: JournalConfig,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Terminal UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for SnaplinkConfig {
    fn default() -> Self {
        Self {
            shortener: ShortenerConfig::default(),
            journal: JournalConfig::default(),
            rate_limit: RateLimitConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Shortener endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    /// Endpoint prefix the percent-encoded URL is appended to
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
        }
    }
}

fn default_api_endpoint() -> String {
    "https://tinyurl.com/api-create.php?url=".to_string()
}

/// Transaction journal configuration.
///
/// The journal endpoint is deployment-specific, so it has no default.
/// Journaling is skipped entirely while it is unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Web-app endpoint that accepts the JSON journal payload
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum requests admitted within the trailing window
    #[serde(default = "default_max_requests")]
    pub max_requests: usize,

    /// Trailing window length in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_ms: default_window_ms(),
        }
    }
}

impl RateLimitConfig {
    /// The trailing window as a [`Duration`].
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

fn default_max_requests() -> usize {
    5
}

fn default_window_ms() -> u64 {
    30_000
}

/// Terminal UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a notice stays "on screen" before an identical one reprints,
    /// in milliseconds
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_ttl_ms: default_notice_ttl_ms(),
        }
    }
}

impl UiConfig {
    /// The notice lifetime as a [`Duration`].
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }
}

fn default_notice_ttl_ms() -> u64 {
    3_000
}

impl SnaplinkConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> crate::error::Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| {
            crate::error::SnaplinkError::Config(format!("Failed to parse config: {}", e))
        })
    }
}
