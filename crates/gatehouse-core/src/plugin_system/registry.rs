use std::sync::Arc;

use crate::plugin_system::manifest::PluginManifest;
use crate::plugin_system::route::{Audience, PluginRoute, RouteCollection};
use crate::router::path;
use crate::ui_bridge::Layout;

/// Runtime aggregate for one plugin. Immutable after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPlugin {
    /// Unique plugin name (same as the manifest name)
    pub name: String,
    /// URL prefix the plugin owns
    pub base_path: String,
    pub manifest: PluginManifest,
    /// Legacy unified route table, visible to both shells
    pub routes: Vec<PluginRoute>,
    pub admin_routes: Vec<PluginRoute>,
    pub resident_routes: Vec<PluginRoute>,
    /// Server-side plugin record, when the plugin came from the catalog
    pub backend_id: Option<String>,
}

impl LoadedPlugin {
    /// Create a plugin with no routes from its manifest
    pub fn new(manifest: PluginManifest) -> Self {
        Self {
            name: manifest.name.clone(),
            base_path: manifest.base_path.clone(),
            manifest,
            routes: Vec::new(),
            admin_routes: Vec::new(),
            resident_routes: Vec::new(),
            backend_id: None,
        }
    }

    pub fn with_routes(mut self, routes: Vec<PluginRoute>) -> Self {
        self.routes = routes;
        self
    }

    pub fn with_admin_routes(mut self, routes: Vec<PluginRoute>) -> Self {
        self.admin_routes = routes;
        self
    }

    pub fn with_resident_routes(mut self, routes: Vec<PluginRoute>) -> Self {
        self.resident_routes = routes;
        self
    }

    pub fn with_backend_id(mut self, backend_id: &str) -> Self {
        self.backend_id = Some(backend_id.to_string());
        self
    }

    /// Base path without leading or trailing slashes
    pub fn normalized_base_path(&self) -> &str {
        path::normalize(&self.base_path)
    }

    /// All three route tables with the collection each belongs to
    pub fn collections(&self) -> [(RouteCollection, &[PluginRoute]); 3] {
        [
            (RouteCollection::Admin, self.admin_routes.as_slice()),
            (RouteCollection::Resident, self.resident_routes.as_slice()),
            (RouteCollection::Legacy, self.routes.as_slice()),
        ]
    }

    /// Routes visible inside `layout`, in search order.
    ///
    /// The audience-specific table comes first, then legacy routes whose
    /// audience admits the layout. Declaration order is kept within each.
    pub fn routes_for(&self, layout: Layout) -> Vec<&PluginRoute> {
        let specific = match layout {
            Layout::Admin => &self.admin_routes,
            Layout::Resident => &self.resident_routes,
        };
        specific
            .iter()
            .chain(
                self.routes
                    .iter()
                    .filter(|r| r.effective_audience(RouteCollection::Legacy).admits(layout)),
            )
            .collect()
    }

    /// Whether any route of this plugin can be shown inside `layout`
    pub fn is_visible_to(&self, layout: Layout) -> bool {
        !self.routes_for(layout).is_empty()
    }

    /// Audience the plugin as a whole declares through its route tables.
    pub fn declared_audience(&self) -> Audience {
        let admin = self.is_visible_to(Layout::Admin);
        let resident = self.is_visible_to(Layout::Resident);
        match (admin, resident) {
            (true, false) => Audience::Admin,
            (false, true) => Audience::Resident,
            _ => Audience::Both,
        }
    }
}

/// Ordered, immutable snapshot of the loaded plugins.
///
/// Cloning is cheap; a new set is built on every load cycle instead of being
/// patched in place. Iteration order is the matcher's ownership scan order.
#[derive(Debug, Clone)]
pub struct PluginSet {
    plugins: Arc<[LoadedPlugin]>,
}

impl PluginSet {
    pub fn new(plugins: Vec<LoadedPlugin>) -> Self {
        Self {
            plugins: Arc::from(plugins),
        }
    }

    /// The valid "no plugins" state
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LoadedPlugin> {
        self.plugins.iter()
    }

    pub fn as_slice(&self) -> &[LoadedPlugin] {
        &self.plugins
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Get a plugin by name
    pub fn get(&self, name: &str) -> Option<&LoadedPlugin> {
        self.plugins.iter().find(|p| p.name == name)
    }

    /// Plugin names in load order
    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name.as_str()).collect()
    }
}

impl Default for PluginSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<LoadedPlugin> for PluginSet {
    fn from_iter<I: IntoIterator<Item = LoadedPlugin>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PluginSet {
    type Item = &'a LoadedPlugin;
    type IntoIter = std::slice::Iter<'a, LoadedPlugin>;

    fn into_iter(self) -> Self::IntoIter {
        self.plugins.iter()
    }
}
