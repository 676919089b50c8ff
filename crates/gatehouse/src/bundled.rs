//! Plugins compiled into the host. They are the last entry of the loader's
//! fallback chain, so the dashboard always has something to route to.
use gatehouse_core::{ComponentRegistry, LoadedPlugin};

pub fn plugins() -> Vec<LoadedPlugin> {
    vec![camera_plugin::plugin(), electricity_plugin::plugin()]
}

/// Views of every bundled plugin. Plugins found in a catalog or on disk can
/// only render components registered here.
pub fn components() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    camera_plugin::register_components(&mut registry);
    electricity_plugin::register_components(&mut registry);
    registry
}
