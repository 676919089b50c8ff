#![cfg(test)]

use crate::plugin_system::registry::{LoadedPlugin, PluginSet};
use crate::plugin_system::route::{Audience, PluginRoute};
use crate::router::matcher::{find_owner, find_plugin_route_and_type};
use crate::tests::integration::common::{bare_plugin, camera, electricity, plugin_set};
use crate::ui_bridge::Layout;

fn component<'a>(path: &str, plugins: &'a PluginSet, layout: Layout) -> Option<&'a str> {
    find_plugin_route_and_type(path, plugins, layout).map(|m| m.route.component.as_str())
}

fn dues(name: &str, base: &str) -> LoadedPlugin {
    bare_plugin(name, base).with_routes(vec![PluginRoute::new("", &format!("{}::Index", name))])
}

#[test]
fn test_exact_route_match() {
    let plugins = plugin_set(vec![electricity()]);

    let m = find_plugin_route_and_type("/electricity/validate", &plugins, Layout::Resident).unwrap();

    assert_eq!(m.plugin.name, "electricity");
    assert_eq!(m.route.component, "electricity::Validate");
    assert_eq!(m.audience, Layout::Resident);
    assert_eq!(m.sub_path, "/validate");
}

#[test]
fn test_root_fallback_variants() {
    let plugins = plugin_set(vec![electricity()]);

    for path in ["/electricity", "/electricity/", "/electricity?x=1", "/electricity#top"] {
        let m = find_plugin_route_and_type(path, &plugins, Layout::Resident)
            .unwrap_or_else(|| panic!("{} should resolve", path));
        assert_eq!(m.route.component, "electricity::Home", "path {}", path);
    }
    let m = find_plugin_route_and_type("/electricity", &plugins, Layout::Resident).unwrap();
    assert_eq!(m.sub_path, "/");
}

#[test]
fn test_query_string_does_not_affect_match() {
    let plugins = plugin_set(vec![electricity()]);
    assert_eq!(
        component("/electricity/validate?token=4411", &plugins, Layout::Resident),
        Some("electricity::Validate")
    );
}

#[test]
fn test_unknown_sub_path_is_unresolved() {
    let plugins = plugin_set(vec![electricity()]);
    assert!(find_plugin_route_and_type("/electricity/unknown", &plugins, Layout::Resident).is_none());
}

#[test]
fn test_longest_match_wins_over_declaration_order() {
    let plugin = bare_plugin("gate", "gate").with_resident_routes(vec![
        PluginRoute::new("passes", "gate::Passes"),
        PluginRoute::new("passes/new", "gate::NewPass"),
        PluginRoute::new("", "gate::Home"),
    ]);
    let plugins = plugin_set(vec![plugin]);

    assert_eq!(component("/gate/passes/new", &plugins, Layout::Resident), Some("gate::NewPass"));
    assert_eq!(component("/gate/passes", &plugins, Layout::Resident), Some("gate::Passes"));
    assert_eq!(component("/gate", &plugins, Layout::Resident), Some("gate::Home"));
}

#[test]
fn test_specific_table_beats_legacy_on_tie() {
    let plugin = bare_plugin("gate", "gate")
        .with_routes(vec![PluginRoute::new("log", "gate::LegacyLog")])
        .with_admin_routes(vec![PluginRoute::new("log", "gate::AdminLog")]);
    let plugins = plugin_set(vec![plugin]);

    assert_eq!(component("/gate/log", &plugins, Layout::Admin), Some("gate::AdminLog"));
    assert_eq!(component("/gate/log", &plugins, Layout::Resident), Some("gate::LegacyLog"));
}

#[test]
fn test_first_owner_wins_and_swaps_with_load_order() {
    let pay_first = plugin_set(vec![dues("pay", "pay"), dues("payment", "payment")]);
    let payment_first = plugin_set(vec![dues("payment", "payment"), dues("pay", "pay")]);

    assert_eq!(
        find_owner("/payment", &pay_first, Layout::Resident).map(|p| p.name.as_str()),
        Some("pay")
    );
    // "pay" owns the request but has no "ment" route; nothing else is tried
    assert!(find_plugin_route_and_type("/payment", &pay_first, Layout::Resident).is_none());

    assert_eq!(component("/payment", &payment_first, Layout::Resident), Some("payment::Index"));
}

#[test]
fn test_resolution_is_deterministic() {
    let plugins = plugin_set(vec![electricity(), camera()]);
    let first = find_plugin_route_and_type("/electricity/validate", &plugins, Layout::Resident);
    for _ in 0..10 {
        assert_eq!(find_plugin_route_and_type("/electricity/validate", &plugins, Layout::Resident), first);
    }
}

#[test]
fn test_empty_set_matches_nothing() {
    let plugins = PluginSet::empty();
    assert!(find_plugin_route_and_type("/", &plugins, Layout::Resident).is_none());
    assert!(find_plugin_route_and_type("/electricity", &plugins, Layout::Admin).is_none());
}

#[test]
fn test_audience_separation() {
    let plugins = plugin_set(vec![camera(), electricity()]);

    assert!(find_plugin_route_and_type("/camera", &plugins, Layout::Resident).is_none());
    assert!(find_plugin_route_and_type("/electricity", &plugins, Layout::Admin).is_none());
    assert_eq!(component("/camera/feeds/detail", &plugins, Layout::Admin), Some("camera::FeedDetail"));
}

#[test]
fn test_invisible_plugin_is_skipped_during_ownership_scan() {
    // Admin-only "gate" would shadow "gatepass" for admins but not for residents
    let gate = bare_plugin("gate", "gate").with_admin_routes(vec![PluginRoute::new("", "gate::Admin")]);
    let gatepass = bare_plugin("gatepass", "gatepass")
        .with_resident_routes(vec![PluginRoute::new("", "gatepass::Home")]);
    let plugins = plugin_set(vec![gate, gatepass]);

    assert_eq!(component("/gatepass", &plugins, Layout::Resident), Some("gatepass::Home"));
    assert!(find_plugin_route_and_type("/gatepass", &plugins, Layout::Admin).is_none());
}

#[test]
fn test_legacy_route_audience_narrowing() {
    let plugin = bare_plugin("dues", "dues").with_routes(vec![
        PluginRoute::new("", "dues::Summary"),
        PluginRoute::new("ledger", "dues::Ledger").with_audience(Audience::Admin),
    ]);
    let plugins = plugin_set(vec![plugin]);

    assert_eq!(component("/dues", &plugins, Layout::Resident), Some("dues::Summary"));
    assert_eq!(component("/dues", &plugins, Layout::Admin), Some("dues::Summary"));
    assert_eq!(component("/dues/ledger", &plugins, Layout::Admin), Some("dues::Ledger"));
    assert!(find_plugin_route_and_type("/dues/ledger", &plugins, Layout::Resident).is_none());
}

#[test]
fn test_path_must_be_absolute() {
    let plugins = plugin_set(vec![electricity()]);
    assert!(find_plugin_route_and_type("electricity/validate", &plugins, Layout::Resident).is_none());
    assert!(find_plugin_route_and_type("", &plugins, Layout::Resident).is_none());
}

#[test]
fn test_root_plugin_owns_only_root() {
    let home = bare_plugin("home", "/").with_routes(vec![PluginRoute::new("", "home::Dashboard")]);
    let plugins = plugin_set(vec![home, electricity()]);

    assert_eq!(component("/", &plugins, Layout::Resident), Some("home::Dashboard"));
    assert_eq!(component("/electricity", &plugins, Layout::Resident), Some("electricity::Home"));
}

#[test]
fn test_nested_sub_path_with_trailing_slash() {
    let plugins = plugin_set(vec![camera()]);
    let m = find_plugin_route_and_type("/camera/feeds/detail/", &plugins, Layout::Admin).unwrap();
    assert_eq!(m.route.component, "camera::FeedDetail");
    assert_eq!(m.sub_path, "/feeds/detail/");
}
