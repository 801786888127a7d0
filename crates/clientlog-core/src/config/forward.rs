//! Console-forwarding options

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};
use crate::logging::Channel;

/// Endpoint forwarded console output is posted to
pub const DEFAULT_ENDPOINT: &str = "/api/debug/client-logs";

/// Console methods a forwarding plugin can intercept
pub const FORWARDABLE_LEVELS: [&str; 5] = ["log", "info", "warn", "error", "debug"];

/// Metadata attached to every forwarded line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForwardMetadata {
    /// Source tag, e.g. `frontend`
    pub source: String,
    /// Whether the plugin adds its own receive timestamp
    pub timestamp: bool,
}

impl Default for ForwardMetadata {
    fn default() -> Self {
        Self {
            source: "frontend".to_string(),
            timestamp: true,
        }
    }
}

/// Options for the console-forwarding plugin
///
/// # Example
///
/// ```
/// use clientlog_core::{Channel, ForwardConfig};
///
/// let config = ForwardConfig::for_environment("development");
/// assert!(config.forwards(Channel::Warn));
/// assert_eq!(config.endpoint, "/api/debug/client-logs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForwardConfig {
    pub enabled: bool,
    pub endpoint: String,
    /// Console methods to forward
    pub levels: Vec<String>,
    pub metadata: ForwardMetadata,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            levels: ["log", "warn", "error", "info", "debug"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            metadata: ForwardMetadata::default(),
        }
    }
}

impl ForwardConfig {
    /// Defaults, enabled only in the `development` environment
    pub fn for_environment(env: &str) -> Self {
        Self {
            enabled: env == "development",
            ..Self::default()
        }
    }

    /// Whether output on `channel` gets forwarded
    pub fn forwards(&self, channel: Channel) -> bool {
        self.enabled && self.levels.iter().any(|l| l == channel.as_str())
    }

    /// Check endpoint shape and level names
    pub fn validate(&self) -> LogResult<()> {
        if !(self.endpoint.starts_with('/') || self.endpoint.starts_with("http")) {
            return Err(LogError::config(format!(
                "endpoint '{}' must be a path or an http(s) URL",
                self.endpoint
            )));
        }
        if let Some(level) = self
            .levels
            .iter()
            .find(|l| !FORWARDABLE_LEVELS.contains(&l.as_str()))
        {
            return Err(LogError::config(format!("unknown console level '{}'", level)));
        }
        Ok(())
    }

    /// User-level location (`~/.config/clientlog/forward.yaml`)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("clientlog").join("forward.yaml")
    }

    /// Load from a YAML file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save as YAML, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Parse the plugin's JSON-shaped options
    pub fn from_json(json: &str) -> LogResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> LogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
