//! Gate camera feeds for estate administrators.
use gatehouse_core::plugin_system::ManifestBuilder;
use gatehouse_core::ui_bridge::{ComponentRegistry, RenderContext, View, ViewError};
use gatehouse_core::{LoadedPlugin, PluginManifest, PluginRoute};

pub const PLUGIN_NAME: &str = "camera";
pub const BASE_PATH: &str = "camera";

pub const FEEDS: &str = "camera::Feeds";
pub const FEED_DETAIL: &str = "camera::FeedDetail";

/// Feeds known to the plugin; the real list comes from the gate controller
const FEEDS_ON_SITE: [(&str, &str); 3] = [("north-gate", "North gate"), ("south-gate", "South gate"), ("lobby", "Lobby")];

pub fn manifest() -> PluginManifest {
    ManifestBuilder::new(PLUGIN_NAME, "Cameras", BASE_PATH)
        .version("0.4.1")
        .description("Live gate camera feeds")
        .build()
}

pub fn plugin() -> LoadedPlugin {
    LoadedPlugin::new(manifest()).with_admin_routes(vec![
        PluginRoute::new("", FEEDS).with_title("Cameras").with_icon("video"),
        PluginRoute::new("feeds/detail", FEED_DETAIL),
    ])
}

pub fn register_components(registry: &mut ComponentRegistry) {
    registry.register_view::<FeedsView>(FEEDS);
    registry.register_view::<FeedDetailView>(FEED_DETAIL);
}

#[derive(Debug, Default)]
pub struct FeedsView;

impl View for FeedsView {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, ViewError> {
        let base = ctx.plugin.normalized_base_path();
        let lines: Vec<String> = FEEDS_ON_SITE
            .iter()
            .map(|(id, name)| format!("{} -> /{}/feeds/detail?feed={}", name, base, id))
            .collect();
        Ok(lines.join("\n"))
    }
}

/// Single feed selected by the `feed` query parameter
#[derive(Debug, Default)]
pub struct FeedDetailView;

impl View for FeedDetailView {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, ViewError> {
        let feed = ctx
            .query_param("feed")
            .ok_or_else(|| ViewError::Render("no feed selected".to_string()))?;
        let (_, name) = FEEDS_ON_SITE
            .iter()
            .find(|(id, _)| *id == feed)
            .ok_or_else(|| ViewError::Render(format!("unknown feed '{}'", feed)))?;
        Ok(format!("{} (live)", name))
    }
}
