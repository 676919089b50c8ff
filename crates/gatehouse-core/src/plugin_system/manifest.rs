use serde::{Deserialize, Serialize};

use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::route::Audience;
use crate::router::path;

/// Static descriptor for a plugin. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    /// Unique identifier for the plugin
    pub name: String,

    /// Human-readable name; falls back to `name` when empty
    #[serde(default)]
    pub title: String,

    /// Plugin version, semver when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// URL prefix the plugin owns
    #[serde(default)]
    pub base_path: String,

    /// Plugin description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declared navigation entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menu: Vec<MenuEntry>,
}

/// Navigation entry declared by a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Path relative to the plugin base path; the base path itself when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Shells the entry is shown in; both when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<Audience>,

    /// Sort key within the plugin's entries
    #[serde(default)]
    pub order: i32,
}

impl PluginManifest {
    /// Create a new plugin manifest
    pub fn new(name: &str, title: &str, base_path: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            version: None,
            base_path: base_path.to_string(),
            description: None,
            menu: Vec::new(),
        }
    }

    /// Base path without leading or trailing slashes
    pub fn normalized_base_path(&self) -> &str {
        path::normalize(&self.base_path)
    }

    /// Title to display, never empty
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { &self.name } else { &self.title }
    }

    /// Parsed semver version, `None` when the manifest declares none.
    pub fn parsed_version(&self) -> Result<Option<semver::Version>, semver::Error> {
        self.version.as_deref().map(semver::Version::parse).transpose()
    }

    /// Checks the fields the router relies on.
    pub fn validate(&self) -> Result<(), PluginSystemError> {
        if self.name.trim().is_empty() {
            return Err(PluginSystemError::InvalidDefinition {
                plugin_id: "<unnamed>".to_string(),
                message: "manifest name is empty".to_string(),
            });
        }
        if let Err(e) = self.parsed_version() {
            return Err(PluginSystemError::InvalidDefinition {
                plugin_id: self.name.clone(),
                message: format!(
                    "version '{}' is not valid semver: {}",
                    self.version.as_deref().unwrap_or_default(),
                    e
                ),
            });
        }
        Ok(())
    }
}

/// Builder for creating a plugin manifest
pub struct ManifestBuilder {
    manifest: PluginManifest,
}

impl ManifestBuilder {
    /// Create a new manifest builder
    pub fn new(name: &str, title: &str, base_path: &str) -> Self {
        Self {
            manifest: PluginManifest::new(name, title, base_path),
        }
    }

    /// Set the plugin version
    pub fn version(mut self, version: &str) -> Self {
        self.manifest.version = Some(version.to_string());
        self
    }

    /// Set the plugin description
    pub fn description(mut self, description: &str) -> Self {
        self.manifest.description = Some(description.to_string());
        self
    }

    /// Add a navigation entry
    pub fn menu_entry(mut self, entry: MenuEntry) -> Self {
        self.manifest.menu.push(entry);
        self
    }

    /// Build the manifest
    pub fn build(self) -> PluginManifest {
        self.manifest
    }
}
