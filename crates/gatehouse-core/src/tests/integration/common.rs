//! Shared fixtures for the unit and scenario tests.
use std::time::Duration;

use async_trait::async_trait;

use crate::plugin_system::error::{PluginSystemError, PluginSystemErrorSource};
use crate::plugin_system::loader::PluginSource;
use crate::plugin_system::manifest::PluginManifest;
use crate::plugin_system::registry::{LoadedPlugin, PluginSet};
use crate::plugin_system::route::PluginRoute;
use crate::ui_bridge::component::{view_fn, ComponentRegistry};

/// Plugin with no routes under `base_path`
pub fn bare_plugin(name: &str, base_path: &str) -> LoadedPlugin {
    LoadedPlugin::new(PluginManifest::new(name, name, base_path))
}

/// Plugin with a single legacy index route, visible to both shells
pub fn routed_plugin(name: &str, base_path: &str) -> LoadedPlugin {
    bare_plugin(name, base_path).with_routes(vec![PluginRoute::new("", &format!("{}::Index", name))])
}

/// `electricity` with resident routes "" -> Home and "validate" -> Validate
pub fn electricity() -> LoadedPlugin {
    bare_plugin("electricity", "electricity").with_resident_routes(vec![
        PluginRoute::new("", "electricity::Home").with_title("Electricity"),
        PluginRoute::new("validate", "electricity::Validate").with_title("Validate token"),
    ])
}

/// `camera` with admin routes only
pub fn camera() -> LoadedPlugin {
    bare_plugin("camera", "camera").with_admin_routes(vec![
        PluginRoute::new("", "camera::Feeds").with_title("Cameras"),
        PluginRoute::new("feeds/detail", "camera::FeedDetail"),
    ])
}

pub fn plugin_set(plugins: Vec<LoadedPlugin>) -> PluginSet {
    PluginSet::new(plugins)
}

/// Components for the fixture plugins; each view renders its own name
pub fn components() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    for key in [
        "electricity::Home",
        "electricity::Validate",
        "camera::Feeds",
        "camera::FeedDetail",
    ] {
        registry.register(key, move || Ok(view_fn(move |_ctx| Ok(format!("view:{}", key)))));
    }
    registry
}

/// Source that always fails, standing in for an unreachable catalog
pub struct FailingSource;

#[async_trait]
impl PluginSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn load(&self) -> Result<Vec<LoadedPlugin>, PluginSystemError> {
        Err(PluginSystemError::LoadingError {
            source_name: "failing".to_string(),
            path: None,
            source: Box::new(PluginSystemErrorSource::Other("catalog unreachable".to_string())),
        })
    }
}

/// Source that answers after `delay`
pub struct SlowSource {
    pub delay: Duration,
    pub plugins: Vec<LoadedPlugin>,
}

#[async_trait]
impl PluginSource for SlowSource {
    fn name(&self) -> &str {
        "slow"
    }

    async fn load(&self) -> Result<Vec<LoadedPlugin>, PluginSystemError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.plugins.clone())
    }
}
