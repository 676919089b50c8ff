use std::collections::HashMap;

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::registry::LoadedPlugin;
use crate::plugin_system::route::RouteCollection;
use crate::ui_bridge::Layout;

/// Types of plugin conflicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictType {
    /// Two plugins normalize to the same base path
    DuplicateBasePath,
    /// An earlier plugin's base path is a prefix of a later one's, so the
    /// earlier plugin claims requests meant for the later one
    ShadowedBasePath,
    /// Two routes in one table normalize to the same path
    DuplicateRoutePath(RouteCollection),
}

impl ConflictType {
    /// Check if this conflict type makes a plugin unreachable
    pub fn is_critical(&self) -> bool {
        match self {
            ConflictType::DuplicateBasePath => true,
            ConflictType::ShadowedBasePath => true,
            ConflictType::DuplicateRoutePath(_) => false,
        }
    }

    /// Get a human-readable description of this conflict type
    pub fn description(&self) -> &str {
        match self {
            ConflictType::DuplicateBasePath => "Duplicate base path",
            ConflictType::ShadowedBasePath => "Base path shadowed by an earlier plugin",
            ConflictType::DuplicateRoutePath(_) => "Duplicate route path",
        }
    }
}

/// Represents a conflict between plugins (or within one plugin)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConflict {
    /// Plugin earlier in load order
    pub first_plugin: String,
    /// Plugin later in load order; same as `first_plugin` for route conflicts
    pub second_plugin: String,
    pub conflict_type: ConflictType,
    pub description: String,
}

impl PluginConflict {
    pub fn new(first_plugin: &str, second_plugin: &str, conflict_type: ConflictType, description: &str) -> Self {
        Self {
            first_plugin: first_plugin.to_string(),
            second_plugin: second_plugin.to_string(),
            conflict_type,
            description: description.to_string(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.conflict_type.is_critical()
    }

    pub fn to_error(&self) -> PluginSystemError {
        PluginSystemError::ConflictError {
            first_plugin: self.first_plugin.clone(),
            second_plugin: self.second_plugin.clone(),
            message: format!("{}: {}", self.conflict_type.description(), self.description),
        }
    }
}

/// What to do with plugins whose base path collides with an earlier one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasePathPolicy {
    /// Keep every plugin; load order decides ownership
    #[default]
    FirstWins,
    /// Drop the later plugin of each conflict
    Reject,
}

/// Whether some shell can see both plugins. Ownership is only contested there.
fn shares_audience(a: &LoadedPlugin, b: &LoadedPlugin) -> bool {
    [Layout::Admin, Layout::Resident]
        .into_iter()
        .any(|layout| a.is_visible_to(layout) && b.is_visible_to(layout))
}

/// Checks whether `earlier` takes requests away from `later`.
fn base_path_conflict(earlier: &LoadedPlugin, later: &LoadedPlugin) -> Option<PluginConflict> {
    if !shares_audience(earlier, later) {
        return None;
    }
    let first = earlier.normalized_base_path();
    let second = later.normalized_base_path();
    if first == second {
        return Some(PluginConflict::new(
            &earlier.name,
            &later.name,
            ConflictType::DuplicateBasePath,
            &format!("both claim '/{}'", first),
        ));
    }
    // An empty base path only owns "/", so it never shadows anything
    if !first.is_empty() && second.starts_with(first) {
        return Some(PluginConflict::new(
            &earlier.name,
            &later.name,
            ConflictType::ShadowedBasePath,
            &format!("'/{}' is claimed first by '/{}'", second, first),
        ));
    }
    None
}

/// Detects every base-path conflict in load order.
pub fn detect_base_path_conflicts(plugins: &[LoadedPlugin]) -> Vec<PluginConflict> {
    let mut conflicts = Vec::new();
    for (i, earlier) in plugins.iter().enumerate() {
        for later in &plugins[i + 1..] {
            if let Some(conflict) = base_path_conflict(earlier, later) {
                conflicts.push(conflict);
            }
        }
    }
    conflicts
}

/// Detects duplicate normalized route paths within each of a plugin's tables.
pub fn detect_route_conflicts(plugin: &LoadedPlugin) -> Vec<PluginConflict> {
    let mut conflicts = Vec::new();
    for (collection, routes) in plugin.collections() {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for route in routes {
            let normalized = route.normalized_path();
            if let Some(previous) = seen.insert(normalized, route.component.as_str()) {
                conflicts.push(PluginConflict::new(
                    &plugin.name,
                    &plugin.name,
                    ConflictType::DuplicateRoutePath(collection),
                    &format!(
                        "'{}' in {} maps to both '{}' and '{}'",
                        normalized,
                        collection.as_str(),
                        previous,
                        route.component
                    ),
                ));
            }
        }
    }
    conflicts
}

/// Applies `policy` to a freshly loaded plugin list, logging every conflict.
pub fn apply_policy(plugins: Vec<LoadedPlugin>, policy: BasePathPolicy) -> Vec<LoadedPlugin> {
    for plugin in &plugins {
        for conflict in detect_route_conflicts(plugin) {
            warn!("{}", conflict.to_error());
        }
    }

    match policy {
        BasePathPolicy::FirstWins => {
            for conflict in detect_base_path_conflicts(&plugins) {
                warn!("{} (first loaded plugin wins)", conflict.to_error());
            }
            plugins
        }
        BasePathPolicy::Reject => {
            let mut kept: Vec<LoadedPlugin> = Vec::with_capacity(plugins.len());
            for candidate in plugins {
                let conflict = kept.iter().find_map(|earlier| base_path_conflict(earlier, &candidate));
                match conflict {
                    Some(conflict) => error!("Rejecting plugin '{}': {}", candidate.name, conflict.to_error()),
                    None => kept.push(candidate),
                }
            }
            kept
        }
    }
}
