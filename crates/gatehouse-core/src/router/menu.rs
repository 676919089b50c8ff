use serde::Serialize;

use crate::plugin_system::registry::PluginSet;
use crate::router::path;
use crate::ui_bridge::Layout;

/// Navigation entry shown in a shell's sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Plugin contributing the entry
    pub plugin: String,
    pub title: String,
    /// Absolute link target
    pub href: String,
    pub icon: Option<String>,
}

/// Navigation entries for `layout`, in plugin load order.
///
/// Titled routes visible to the shell come first, in search order, followed
/// by the manifest's declared menu entries sorted by `order`. An href is
/// listed at most once per plugin.
pub fn menu_for(plugins: &PluginSet, layout: Layout) -> Vec<MenuItem> {
    let mut items = Vec::new();

    for plugin in plugins {
        let mut plugin_items: Vec<MenuItem> = Vec::new();
        let mut push = |item: MenuItem| {
            if !plugin_items.iter().any(|existing| existing.href == item.href) {
                plugin_items.push(item);
            }
        };

        for route in plugin.routes_for(layout) {
            if let Some(title) = &route.title {
                push(MenuItem {
                    plugin: plugin.name.clone(),
                    title: title.clone(),
                    href: path::join(&plugin.base_path, &route.path),
                    icon: route.icon.clone(),
                });
            }
        }

        let mut declared: Vec<_> = plugin
            .manifest
            .menu
            .iter()
            .filter(|entry| entry.audience.is_none_or(|a| a.admits(layout)))
            .collect();
        declared.sort_by_key(|entry| entry.order);
        for entry in declared {
            push(MenuItem {
                plugin: plugin.name.clone(),
                title: entry.title.clone(),
                href: path::join(&plugin.base_path, entry.path.as_deref().unwrap_or("")),
                icon: entry.icon.clone(),
            });
        }

        items.extend(plugin_items);
    }
    items
}
