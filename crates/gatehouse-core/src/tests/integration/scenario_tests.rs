use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{camera, components, electricity, FailingSource};
use crate::plugin_system::catalog::RemoteCatalogSource;
use crate::plugin_system::conflict::BasePathPolicy;
use crate::plugin_system::loader::{PluginLoader, StaticPluginSource};
use crate::router::matcher::find_plugin_route_and_type;
use crate::ui_bridge::{Layout, PageContent, RecoveryAction, RenderDispatcher};

fn dispatcher() -> RenderDispatcher {
    RenderDispatcher::new(Arc::new(components()))
}

fn bundled_loader() -> PluginLoader {
    PluginLoader::new(BasePathPolicy::FirstWins).with_strategy(StaticPluginSource::new(vec![electricity()]))
}

#[tokio::test]
async fn test_resident_validate_route_resolves() {
    let plugins = bundled_loader().load().await;

    let page = dispatcher().resolve("/electricity/validate", &plugins, Layout::Resident);

    assert_eq!(page.layout, Layout::Resident);
    assert_eq!(page.body(), Some("view:electricity::Validate"));
    assert_eq!(page.title, "Validate token");
}

#[tokio::test]
async fn test_plugin_root_resolves_to_home() {
    let plugins = bundled_loader().load().await;

    let page = dispatcher().resolve("/electricity", &plugins, Layout::Resident);

    assert_eq!(page.body(), Some("view:electricity::Home"));
}

#[tokio::test]
async fn test_unknown_subpath_is_not_found_in_resident_shell() {
    let plugins = bundled_loader().load().await;

    let page = dispatcher().resolve("/electricity/unknown", &plugins, Layout::Resident);

    assert!(page.is_not_found());
    assert_eq!(page.layout, Layout::Resident);
    assert_eq!(page.recovery, Some(RecoveryAction::NavigateTo("/dashboard".to_string())));
}

#[tokio::test]
async fn test_admin_only_plugin_does_not_leak_into_resident_resolution() {
    let loader = PluginLoader::new(BasePathPolicy::FirstWins)
        .with_strategy(StaticPluginSource::new(vec![camera(), electricity()]));
    let plugins = loader.load().await;

    assert!(find_plugin_route_and_type("/camera", &plugins, Layout::Resident).is_none());

    let page = dispatcher().resolve("/camera", &plugins, Layout::Resident);
    assert!(page.is_not_found());
    assert!(!matches!(page.content, PageContent::View { .. }));

    // The same path is fine for the admin shell
    let admin_page = dispatcher().resolve("/camera", &plugins, Layout::Admin);
    assert_eq!(admin_page.body(), Some("view:camera::Feeds"));
}

#[tokio::test]
async fn test_rejected_remote_fetch_falls_back_to_bundled_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plugins/installed"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let loader = PluginLoader::new(BasePathPolicy::FirstWins)
        .with_strategy(RemoteCatalogSource::new(&server.uri(), std::time::Duration::from_secs(5)).unwrap())
        .with_strategy(StaticPluginSource::new(vec![electricity()]));
    let plugins = loader.load().await;

    assert_eq!(plugins.names(), vec!["electricity"]);
    let page = dispatcher().resolve("/electricity/validate", &plugins, Layout::Resident);
    assert_eq!(page.body(), Some("view:electricity::Validate"));
}

#[tokio::test]
async fn test_every_source_failing_renders_not_found() {
    let loader = PluginLoader::new(BasePathPolicy::FirstWins)
        .with_strategy(FailingSource)
        .with_strategy(FailingSource);
    let plugins = loader.load().await;

    assert!(plugins.is_empty());
    let page = dispatcher().resolve("/electricity/validate", &plugins, Layout::Resident);
    assert!(page.is_not_found());
    assert_eq!(page.layout, Layout::Resident);
}
