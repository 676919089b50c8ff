//! Electricity token purchase and validation for residents.
//!
//! Bundled with the dashboard host. Every route lives in the resident shell;
//! the actual token checks happen on the backend, so the views only shape
//! what the resident sees.
use gatehouse_core::plugin_system::{ManifestBuilder, MenuEntry};
use gatehouse_core::ui_bridge::{ComponentRegistry, RenderContext, View, ViewError};
use gatehouse_core::{Audience, LoadedPlugin, PluginRoute};
use log::debug;

pub const PLUGIN_NAME: &str = "electricity";
pub const BASE_PATH: &str = "electricity";

pub const HOME: &str = "electricity::Home";
pub const VALIDATE: &str = "electricity::Validate";
pub const HISTORY: &str = "electricity::History";

pub fn manifest() -> gatehouse_core::PluginManifest {
    ManifestBuilder::new(PLUGIN_NAME, "Electricity", BASE_PATH)
        .version("1.2.0")
        .description("Buy and validate prepaid electricity tokens")
        .menu_entry(MenuEntry {
            title: "Purchase history".to_string(),
            icon: Some("receipt".to_string()),
            path: Some("history".to_string()),
            audience: Some(Audience::Resident),
            order: 10,
        })
        .build()
}

/// The plugin definition with its resident route table
pub fn plugin() -> LoadedPlugin {
    LoadedPlugin::new(manifest()).with_resident_routes(vec![
        PluginRoute::new("", HOME).with_title("Electricity").with_icon("bolt"),
        PluginRoute::new("validate", VALIDATE).with_title("Validate token"),
        PluginRoute::new("history", HISTORY),
    ])
}

/// Register this plugin's views with the host
pub fn register_components(registry: &mut ComponentRegistry) {
    registry.register_view::<HomeView>(HOME);
    registry.register_view::<ValidateView>(VALIDATE);
    registry.register_view::<HistoryView>(HISTORY);
}

#[derive(Debug, Default)]
pub struct HomeView;

impl View for HomeView {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, ViewError> {
        Ok(format!(
            "Electricity\nBuy a token or validate one at /{}/validate",
            ctx.plugin.normalized_base_path()
        ))
    }
}

/// Checks the shape of a 20 digit meter token before it is sent to the backend
#[derive(Debug, Default)]
pub struct ValidateView;

impl ValidateView {
    fn check(token: &str) -> Result<String, ViewError> {
        let digits: String = token.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
        if digits.len() != 20 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ViewError::Render(format!("'{}' is not a 20 digit token", token)));
        }
        Ok(digits)
    }
}

impl View for ValidateView {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, ViewError> {
        match ctx.query_param("token") {
            Some(token) => {
                let digits = Self::check(token)?;
                debug!("Token ending {} submitted for validation", &digits[16..]);
                Ok(format!("Token {} submitted for validation", digits))
            }
            None => Ok("Enter the 20 digit token printed on your receipt".to_string()),
        }
    }
}

#[derive(Debug, Default)]
pub struct HistoryView;

impl View for HistoryView {
    fn render(&self, _ctx: &RenderContext<'_>) -> Result<String, ViewError> {
        Ok("Purchase history\nNo purchases yet".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::Layout;

    fn render(key: &str, request_path: &str) -> Result<String, ViewError> {
        let mut registry = ComponentRegistry::new();
        register_components(&mut registry);
        let plugin = plugin();
        let route = PluginRoute::new("", key);
        let ctx = RenderContext {
            plugin: &plugin,
            route: &route,
            layout: Layout::Resident,
            request_path,
            sub_path: "/",
        };
        registry.instantiate(key)?.render(&ctx)
    }

    #[test]
    fn test_plugin_is_resident_only() {
        let plugin = plugin();
        assert!(manifest().validate().is_ok());
        assert_eq!(plugin.declared_audience(), Audience::Resident);
        assert!(!plugin.is_visible_to(Layout::Admin));
    }

    #[test]
    fn test_every_route_has_a_component() {
        let mut registry = ComponentRegistry::new();
        register_components(&mut registry);
        for route in plugin().resident_routes {
            assert!(registry.contains(&route.component), "{} is not registered", route.component);
        }
    }

    #[test]
    fn test_validate_accepts_grouped_token() {
        let body = render(VALIDATE, "/electricity/validate?token=1234-5678-9012-3456-7890").unwrap();
        assert_eq!(body, "Token 12345678901234567890 submitted for validation");
    }

    #[test]
    fn test_validate_rejects_short_token() {
        assert!(matches!(render(VALIDATE, "/electricity/validate?token=1234"), Err(ViewError::Render(_))));
    }

    #[test]
    fn test_validate_without_token_shows_prompt() {
        assert!(render(VALIDATE, "/electricity/validate").unwrap().starts_with("Enter"));
    }
}
