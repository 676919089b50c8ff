use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::fs;

use crate::kernel::constants::MANIFEST_FILE_NAME;
use crate::plugin_system::catalog::{PluginDescriptor, RemoteCatalogSource};
use crate::plugin_system::conflict::{self, BasePathPolicy};
use crate::plugin_system::error::{PluginSystemError, PluginSystemErrorSource};
use crate::plugin_system::registry::{LoadedPlugin, PluginSet};
use crate::storage::config::DashboardConfig;

/// One way of obtaining plugin definitions
#[async_trait]
pub trait PluginSource: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Produce the plugins of this source in load order.
    async fn load(&self) -> Result<Vec<LoadedPlugin>, PluginSystemError>;
}

/// Plugins compiled into the application
#[derive(Debug, Clone, Default)]
pub struct StaticPluginSource {
    plugins: Vec<LoadedPlugin>,
}

impl StaticPluginSource {
    pub fn new(plugins: Vec<LoadedPlugin>) -> Self {
        Self { plugins }
    }

    pub fn plugins(&self) -> &[LoadedPlugin] {
        &self.plugins
    }
}

#[async_trait]
impl PluginSource for StaticPluginSource {
    fn name(&self) -> &str {
        "bundled"
    }

    async fn load(&self) -> Result<Vec<LoadedPlugin>, PluginSystemError> {
        Ok(self.plugins.clone())
    }
}

/// Plugins described by `manifest.json` files below a set of directories
#[derive(Debug, Clone, Default)]
pub struct DirectoryPluginSource {
    plugin_dirs: Vec<PathBuf>,
}

impl DirectoryPluginSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plugin directory to search
    pub fn add_plugin_dir<P: AsRef<Path>>(&mut self, dir: P) {
        self.plugin_dirs.push(dir.as_ref().to_path_buf());
    }

    /// Scan every configured directory for plugin descriptors
    pub async fn scan_for_manifests(&self) -> Result<Vec<LoadedPlugin>, PluginSystemError> {
        let mut plugins = Vec::new();
        let mut scanned_any = false;

        for dir in &self.plugin_dirs {
            let is_dir = match fs::metadata(dir).await {
                Ok(meta) => meta.is_dir(),
                Err(e) => {
                    debug!("Plugin directory {} is not readable: {}", dir.display(), e);
                    false
                }
            };
            if !is_dir {
                continue;
            }
            scanned_any = true;
            self.scan_directory_boxed(dir.clone(), &mut plugins).await?;
        }

        if !scanned_any {
            return Err(PluginSystemError::LoadingError {
                source_name: self.name().to_string(),
                path: self.plugin_dirs.first().cloned(),
                source: Box::new(PluginSystemErrorSource::Other(
                    "none of the configured plugin directories exist".to_string(),
                )),
            });
        }
        Ok(plugins)
    }

    /// Boxed wrapper so the directory walk can recurse
    fn scan_directory_boxed<'a>(
        &'a self,
        dir: PathBuf,
        plugins: &'a mut Vec<LoadedPlugin>,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginSystemError>> + Send + 'a>> {
        Box::pin(self.scan_directory_inner(dir, plugins))
    }

    async fn scan_directory_inner(&self, dir: PathBuf, plugins: &mut Vec<LoadedPlugin>) -> Result<(), PluginSystemError> {
        let mut read_dir = fs::read_dir(&dir).await.map_err(|e| self.io_error(&dir, e))?;

        // read_dir order is platform dependent; load order must not be
        let mut subdirs = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(|e| self.io_error(&dir, e))? {
            let entry_path = entry.path();
            match fs::metadata(&entry_path).await {
                Ok(meta) if meta.is_dir() => subdirs.push(entry_path),
                Ok(_) => {}
                Err(e) => warn!("Failed to get metadata for {}: {}", entry_path.display(), e),
            }
        }
        subdirs.sort();

        for subdir in subdirs {
            let manifest_path = subdir.join(MANIFEST_FILE_NAME);
            if fs::metadata(&manifest_path).await.map(|m| m.is_file()).unwrap_or(false) {
                match self.load_descriptor(&manifest_path).await {
                    Ok(plugin) => plugins.push(plugin),
                    Err(e) => warn!("Error loading manifest from {}: {}", manifest_path.display(), e),
                }
            }

            if let Err(e) = self.scan_directory_boxed(subdir.clone(), plugins).await {
                warn!("Error scanning subdirectory {}: {}", subdir.display(), e);
            }
        }
        Ok(())
    }

    async fn load_descriptor(&self, path: &Path) -> Result<LoadedPlugin, PluginSystemError> {
        let content = fs::read_to_string(path).await.map_err(|e| self.io_error(path, e))?;
        let descriptor: PluginDescriptor = serde_json::from_str(&content).map_err(|e| PluginSystemError::ManifestError {
            path: path.to_path_buf(),
            message: format!("Failed to parse manifest JSON: {}", e),
            source: Some(Box::new(e)),
        })?;
        descriptor.into_loaded()
    }

    fn io_error(&self, path: &Path, e: std::io::Error) -> PluginSystemError {
        PluginSystemError::LoadingError {
            source_name: self.name().to_string(),
            path: Some(path.to_path_buf()),
            source: Box::new(PluginSystemErrorSource::Io(e)),
        }
    }
}

#[async_trait]
impl PluginSource for DirectoryPluginSource {
    fn name(&self) -> &str {
        "plugin-directories"
    }

    async fn load(&self) -> Result<Vec<LoadedPlugin>, PluginSystemError> {
        self.scan_for_manifests().await
    }
}

/// Produces the [`PluginSet`] for a session by trying load strategies in
/// order. The first strategy that succeeds wins; when every strategy fails
/// the result is an empty set, never an error.
pub struct PluginLoader {
    strategies: Vec<Box<dyn PluginSource>>,
    policy: BasePathPolicy,
}

impl PluginLoader {
    /// Create a loader with no strategies
    pub fn new(policy: BasePathPolicy) -> Self {
        Self {
            strategies: Vec::new(),
            policy,
        }
    }

    /// Build the strategy chain from configuration.
    ///
    /// Order: remote catalog (only when `prefer_remote` is set and a catalog
    /// URL is configured), plugin directories (when configured), then the
    /// bundled list.
    pub fn from_config(config: &DashboardConfig, bundled: Vec<LoadedPlugin>) -> Self {
        let mut loader = Self::new(config.base_path_policy);

        if config.prefer_remote {
            match &config.catalog_url {
                Some(url) => match RemoteCatalogSource::new(url, config.request_timeout()) {
                    Ok(source) => loader.add_strategy(Box::new(source)),
                    Err(e) => warn!("Skipping remote plugin catalog: {}", e),
                },
                None => warn!("Remote plugin catalog preferred but no catalog_url is configured"),
            }
        }

        if !config.plugin_dirs.is_empty() {
            let mut dirs = DirectoryPluginSource::new();
            for dir in &config.plugin_dirs {
                dirs.add_plugin_dir(dir);
            }
            loader.add_strategy(Box::new(dirs));
        }

        loader.add_strategy(Box::new(StaticPluginSource::new(bundled)));
        loader
    }

    /// Append a strategy to the fallback chain
    pub fn add_strategy(&mut self, source: Box<dyn PluginSource>) {
        self.strategies.push(source);
    }

    pub fn with_strategy<S: PluginSource + 'static>(mut self, source: S) -> Self {
        self.add_strategy(Box::new(source));
        self
    }

    /// Strategy names in fallback order
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn policy(&self) -> BasePathPolicy {
        self.policy
    }

    /// Load the plugin set, falling back through the strategy chain.
    pub async fn load(&self) -> PluginSet {
        for source in &self.strategies {
            match source.load().await {
                Ok(plugins) => {
                    info!("Loaded {} plugin(s) from '{}'", plugins.len(), source.name());
                    return Self::finalize(plugins, self.policy);
                }
                Err(e) => warn!("Plugin source '{}' failed, falling back: {}", source.name(), e),
            }
        }
        warn!("No plugin source succeeded; continuing with no plugins");
        PluginSet::empty()
    }

    /// Synchronous variant for statically bundled plugins
    pub fn load_static(plugins: Vec<LoadedPlugin>, policy: BasePathPolicy) -> PluginSet {
        Self::finalize(plugins, policy)
    }

    fn finalize(plugins: Vec<LoadedPlugin>, policy: BasePathPolicy) -> PluginSet {
        PluginSet::new(conflict::apply_policy(plugins, policy))
    }
}

impl Default for PluginLoader {
    fn default() -> Self {
        Self::new(BasePathPolicy::default())
    }
}
