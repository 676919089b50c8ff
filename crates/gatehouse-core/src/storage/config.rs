use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::kernel::constants::{DEFAULT_DASHBOARD, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::kernel::error::Result;
use crate::plugin_system::conflict::BasePathPolicy;
use crate::storage::error::StorageSystemError;
use crate::ui_bridge::Layout;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// Logging settings consumed by the host binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of plain text
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Dashboard routing configuration. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the backend plugin catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_url: Option<String>,
    /// Try the remote catalog before local sources
    pub prefer_remote: bool,
    /// Remote catalog request timeout in seconds
    pub request_timeout_secs: u64,
    /// Directories scanned for plugin `manifest.json` files
    pub plugin_dirs: Vec<PathBuf>,
    pub base_path_policy: BasePathPolicy,
    /// Target of the not-found page's recovery action
    pub default_dashboard: String,
    /// Shell used when the caller does not name one
    pub default_layout: Layout,
    pub log: LogConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            catalog_url: None,
            prefer_remote: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            plugin_dirs: Vec::new(),
            base_path_policy: BasePathPolicy::default(),
            default_dashboard: DEFAULT_DASHBOARD.to_string(),
            default_layout: Layout::default(),
            log: LogConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Reject values the router cannot work with.
    pub fn validate(&self) -> std::result::Result<(), StorageSystemError> {
        if self.request_timeout_secs == 0 {
            return Err(StorageSystemError::InvalidValue {
                key: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !self.default_dashboard.starts_with('/') {
            return Err(StorageSystemError::InvalidValue {
                key: "default_dashboard",
                reason: format!("'{}' must be an absolute path", self.default_dashboard),
            });
        }
        if let Some(url) = &self.catalog_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(StorageSystemError::InvalidValue {
                    key: "catalog_url",
                    reason: format!("'{}' is not an http(s) URL", url),
                });
            }
        }
        Ok(())
    }

    /// Serialize to string based on format
    pub fn serialize(&self, format: ConfigFormat) -> std::result::Result<String, StorageSystemError> {
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| ser_error("json", e)),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| ser_error("yaml", e)),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| ser_error("toml", e)),
        }
    }

    /// Deserialize from string based on format
    pub fn deserialize(data: &str, format: ConfigFormat) -> std::result::Result<Self, StorageSystemError> {
        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| de_error("json", e))?,
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| de_error("yaml", e))?,
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| de_error("toml", e))?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, picking the format from its extension.
    pub async fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| StorageSystemError::UnsupportedConfigFormat(path.to_path_buf()))?;
        let data = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StorageSystemError::ConfigRead { path: path.to_path_buf(), source })?;
        Ok(Self::deserialize(&data, format)?)
    }

    /// Load `path` when given, otherwise the defaults
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path).await,
            None => Ok(Self::default()),
        }
    }
}

fn ser_error<E>(format: &'static str, e: E) -> StorageSystemError
where
    E: std::error::Error + Send + Sync + 'static,
{
    StorageSystemError::Encode { format, source: Box::new(e) }
}

fn de_error<E>(format: &'static str, e: E) -> StorageSystemError
where
    E: std::error::Error + Send + Sync + 'static,
{
    StorageSystemError::Decode { format, source: Box::new(e) }
}
