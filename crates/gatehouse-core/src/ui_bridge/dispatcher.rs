use std::sync::Arc;

use log::debug;

use crate::kernel::constants::DEFAULT_DASHBOARD;
use crate::plugin_system::registry::PluginSet;
use crate::plugin_system::route::Audience;
use crate::router::matcher::{find_plugin_route_and_type, RouteMatch};
use crate::ui_bridge::boundary::FaultBoundary;
use crate::ui_bridge::component::{ComponentRegistry, RenderContext};
use crate::ui_bridge::{Layout, Page, PageContent, RecoveryAction};

/// Picks the layout shell for a resolution result and mounts the route's view.
#[derive(Debug, Clone)]
pub struct RenderDispatcher {
    components: Arc<ComponentRegistry>,
    default_dashboard: String,
}

impl RenderDispatcher {
    pub fn new(components: Arc<ComponentRegistry>) -> Self {
        Self {
            components,
            default_dashboard: DEFAULT_DASHBOARD.to_string(),
        }
    }

    /// Where the not-found page sends the user
    pub fn with_default_dashboard(mut self, path: &str) -> Self {
        self.default_dashboard = path.to_string();
        self
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    /// Match `request_path` against `plugins` and dispatch the result.
    pub fn resolve(&self, request_path: &str, plugins: &PluginSet, layout: Layout) -> Page {
        let matched = find_plugin_route_and_type(request_path, plugins, layout);
        self.dispatch(request_path, matched, plugins, layout)
    }

    /// Render a resolution result. Never fails; failures become pages.
    pub fn dispatch(
        &self,
        request_path: &str,
        matched: Option<RouteMatch<'_>>,
        plugins: &PluginSet,
        requested: Layout,
    ) -> Page {
        match matched {
            Some(route_match) => self.render_match(request_path, &route_match),
            None => self.not_found(request_path, plugins, requested),
        }
    }

    fn render_match(&self, request_path: &str, route_match: &RouteMatch<'_>) -> Page {
        let plugin = route_match.plugin;
        let route = route_match.route;
        let title = route
            .title
            .clone()
            .unwrap_or_else(|| plugin.manifest.display_title().to_string());

        let ctx = RenderContext {
            plugin,
            route,
            layout: route_match.audience,
            request_path,
            sub_path: &route_match.sub_path,
        };

        // Construction runs inside the boundary too
        let boundary = FaultBoundary::new(&plugin.name);
        let rendered = boundary.run(|| {
            let view = self.components.instantiate(&route.component)?;
            view.render(&ctx)
        });

        match rendered {
            Ok(body) => Page {
                layout: route_match.audience,
                title,
                content: PageContent::View {
                    plugin: plugin.name.clone(),
                    body,
                },
                recovery: None,
            },
            Err(e) => Page {
                layout: route_match.audience,
                title,
                content: PageContent::PluginError {
                    plugin: plugin.name.clone(),
                    message: e.to_string(),
                },
                recovery: Some(RecoveryAction::Reload),
            },
        }
    }

    fn not_found(&self, request_path: &str, plugins: &PluginSet, requested: Layout) -> Page {
        debug!("No plugin route for '{}'", request_path);
        Page {
            layout: guess_layout(request_path, plugins, requested),
            title: "Not found".to_string(),
            content: PageContent::NotFound {
                path: request_path.to_string(),
            },
            recovery: Some(RecoveryAction::NavigateTo(self.default_dashboard.clone())),
        }
    }
}

/// Best-guess shell for a request no route matched.
///
/// The first plugin whose base path appears anywhere in the request decides
/// through its declared audience; a plugin serving both shells keeps the
/// requested one. With no such plugin the resident shell is used.
pub fn guess_layout(request_path: &str, plugins: &PluginSet, requested: Layout) -> Layout {
    let hint = plugins.iter().find(|plugin| {
        let base = plugin.normalized_base_path();
        !base.is_empty() && request_path.contains(base)
    });

    match hint.map(|plugin| plugin.declared_audience()) {
        Some(Audience::Admin) => Layout::Admin,
        Some(Audience::Resident) => Layout::Resident,
        Some(Audience::Both) => requested,
        None => Layout::Resident,
    }
}
