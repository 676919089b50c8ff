use gatehouse_core::router::MenuItem;
use gatehouse_core::{Layout, Page, PluginSet};

pub fn print_page(page: &Page) {
    print!("{}", page);
}

/// One line per plugin, in load order
pub fn print_plugins(plugins: &PluginSet) {
    if plugins.is_empty() {
        println!("No plugins loaded.");
        return;
    }
    println!("Loaded plugins:");
    for plugin in plugins {
        println!(
            "  - Name: {}, Base path: /{}, Audience: {}, Version: {}, Backend id: {}",
            plugin.name,
            plugin.normalized_base_path(),
            plugin.declared_audience(),
            plugin.manifest.version.as_deref().unwrap_or("-"),
            plugin.backend_id.as_deref().unwrap_or("-"),
        );
    }
}

pub fn print_menu(items: &[MenuItem], layout: Layout) {
    if items.is_empty() {
        println!("No menu entries for the {} shell.", layout);
        return;
    }
    println!("Menu ({} shell):", layout);
    for item in items {
        match &item.icon {
            Some(icon) => println!("  [{}] {} -> {}", icon, item.title, item.href),
            None => println!("  {} -> {}", item.title, item.href),
        }
    }
}
