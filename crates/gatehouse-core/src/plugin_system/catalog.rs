use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::kernel::constants::CATALOG_INSTALLED_ENDPOINT;
use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::loader::PluginSource;
use crate::plugin_system::manifest::PluginManifest;
use crate::plugin_system::registry::LoadedPlugin;
use crate::plugin_system::route::PluginRoute;

/// Wire shape of one installed plugin, shared by the backend catalog and
/// on-disk `manifest.json` files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    /// Backend plugin record id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Overrides the manifest base path when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    pub manifest: PluginManifest,
    #[serde(default)]
    pub routes: Vec<PluginRoute>,
    #[serde(default)]
    pub admin_routes: Vec<PluginRoute>,
    #[serde(default)]
    pub resident_routes: Vec<PluginRoute>,
}

impl PluginDescriptor {
    /// Validates the descriptor and turns it into a [`LoadedPlugin`].
    pub fn into_loaded(self) -> Result<LoadedPlugin, PluginSystemError> {
        if self.name.trim().is_empty() {
            return Err(PluginSystemError::InvalidDefinition {
                plugin_id: self.id.unwrap_or_else(|| "<unnamed>".to_string()),
                message: "descriptor name is empty".to_string(),
            });
        }

        let mut manifest = self.manifest;
        manifest.name = self.name;
        if manifest.title.is_empty() {
            manifest.title = manifest.name.clone();
        }
        if let Some(base_path) = self.base_path {
            manifest.base_path = base_path;
        }
        manifest.validate()?;

        for route in self.routes.iter().chain(&self.admin_routes).chain(&self.resident_routes) {
            if route.component.trim().is_empty() {
                return Err(PluginSystemError::InvalidDefinition {
                    plugin_id: manifest.name.clone(),
                    message: format!("route '{}' has no component", route.path),
                });
            }
        }

        let mut plugin = LoadedPlugin::new(manifest)
            .with_routes(self.routes)
            .with_admin_routes(self.admin_routes)
            .with_resident_routes(self.resident_routes);
        plugin.backend_id = self.id;
        Ok(plugin)
    }
}

/// Fetches the installed plugins from the backend catalog
#[derive(Debug, Clone)]
pub struct RemoteCatalogSource {
    client: reqwest::Client,
    catalog_url: String,
}

impl RemoteCatalogSource {
    /// Fails when the HTTP client cannot be built with `timeout`.
    pub fn new(catalog_url: &str, timeout: Duration) -> Result<Self, PluginSystemError> {
        let catalog_url = catalog_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PluginSystemError::CatalogRequest {
                url: catalog_url.clone(),
                source: e,
            })?;
        Ok(Self { client, catalog_url })
    }

    /// Full URL of the installed-plugins listing
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.catalog_url, CATALOG_INSTALLED_ENDPOINT)
    }
}

#[async_trait]
impl PluginSource for RemoteCatalogSource {
    fn name(&self) -> &str {
        "remote-catalog"
    }

    async fn load(&self) -> Result<Vec<LoadedPlugin>, PluginSystemError> {
        let url = self.endpoint();
        debug!("Fetching installed plugins from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PluginSystemError::CatalogRequest { url: url.clone(), source: e })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PluginSystemError::CatalogStatus { url, status: status.as_u16() });
        }

        let descriptors: Vec<PluginDescriptor> = response
            .json()
            .await
            .map_err(|e| PluginSystemError::CatalogRequest { url: url.clone(), source: e })?;

        // One broken descriptor must not take the whole catalog down
        let mut plugins = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            match descriptor.into_loaded() {
                Ok(plugin) => plugins.push(plugin),
                Err(e) => warn!("Skipping catalog plugin: {}", e),
            }
        }
        Ok(plugins)
    }
}
