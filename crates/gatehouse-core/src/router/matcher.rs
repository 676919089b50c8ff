use std::cmp::Reverse;

use log::trace;

use crate::plugin_system::registry::{LoadedPlugin, PluginSet};
use crate::plugin_system::route::PluginRoute;
use crate::router::path;
use crate::ui_bridge::Layout;

/// Successful resolution of a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// Plugin that owns the request
    pub plugin: &'a LoadedPlugin,
    /// Route within that plugin
    pub route: &'a PluginRoute,
    /// Shell the route was resolved for
    pub audience: Layout,
    /// Request path with the base path removed, `/` for the plugin root
    pub sub_path: String,
}

/// Whether `plugin` claims `request_path` (already stripped of its query).
fn owns(plugin: &LoadedPlugin, request_path: &str) -> bool {
    let base = plugin.normalized_base_path();
    if base.is_empty() {
        // A root plugin only owns the root itself
        request_path == "/"
    } else {
        request_path[1..].starts_with(base)
    }
}

/// First plugin in load order that owns `request_path` and has routes for
/// `layout`.
///
/// This is a first-owner-wins scan: a later plugin with a more specific base
/// path is never considered once an earlier one claims the request.
pub fn find_owner<'a>(request_path: &str, plugins: &'a PluginSet, layout: Layout) -> Option<&'a LoadedPlugin> {
    let request_path = path::strip_query(request_path);
    if !request_path.starts_with('/') {
        return None;
    }
    plugins
        .iter()
        .filter(|plugin| plugin.is_visible_to(layout))
        .find(|plugin| owns(plugin, request_path))
}

/// Resolve `full_path` to a plugin route for the shell `layout`.
///
/// Returns `None` when no plugin owns the path, or when the owning plugin has
/// no route for the remaining sub-path. In the second case no other plugin is
/// tried. Pure: the same inputs always give the same answer.
pub fn find_plugin_route_and_type<'a>(
    full_path: &str,
    plugins: &'a PluginSet,
    layout: Layout,
) -> Option<RouteMatch<'a>> {
    let request_path = path::strip_query(full_path);
    let plugin = find_owner(request_path, plugins, layout)?;

    let base = plugin.normalized_base_path();
    let rest = &request_path[1 + base.len()..];
    let sub_path = if rest.is_empty() { "/".to_string() } else { rest.to_string() };
    let wanted = path::normalize(&sub_path);

    // Longest pattern first; the sort is stable so declaration order breaks ties
    let mut candidates = plugin.routes_for(layout);
    candidates.sort_by_key(|route| Reverse(route.normalized_path().len()));

    // A root sub-path normalizes to "" and lands on the index route
    let route = candidates.into_iter().find(|route| route.normalized_path() == wanted);

    match route {
        Some(route) => {
            trace!("'{}' resolved to {}:{}", full_path, plugin.name, route.component);
            Some(RouteMatch {
                plugin,
                route,
                audience: layout,
                sub_path,
            })
        }
        None => {
            trace!("'{}' is owned by '{}' but matches none of its routes", full_path, plugin.name);
            None
        }
    }
}
