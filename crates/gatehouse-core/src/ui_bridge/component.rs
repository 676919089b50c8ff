use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::plugin_system::registry::LoadedPlugin;
use crate::plugin_system::route::PluginRoute;
use crate::ui_bridge::Layout;
use crate::ui_bridge::error::ViewError;

/// Everything a view knows about the request it renders
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub plugin: &'a LoadedPlugin,
    pub route: &'a PluginRoute,
    pub layout: Layout,
    /// Request path as received, query included
    pub request_path: &'a str,
    pub sub_path: &'a str,
}

impl RenderContext<'_> {
    /// Value of a query parameter in the request path
    pub fn query_param(&self, key: &str) -> Option<&str> {
        let (_, query) = self.request_path.split_once('?')?;
        let query = query.split('#').next().unwrap_or_default();
        query.split('&').find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k == key).then_some(v)
        })
    }
}

/// A renderable plugin view
pub trait View: Send + Sync {
    /// Render the view body.
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, ViewError>;
}

/// Constructs a view on demand. Runs only when a route is dispatched.
pub type ViewFactory = Arc<dyn Fn() -> Result<Box<dyn View>, ViewError> + Send + Sync>;

struct FnView<F>(F);

impl<F> View for FnView<F>
where
    F: Fn(&RenderContext<'_>) -> Result<String, ViewError> + Send + Sync,
{
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, ViewError> {
        (self.0)(ctx)
    }
}

/// Wrap a closure as a [`View`]
pub fn view_fn<F>(render: F) -> Box<dyn View>
where
    F: Fn(&RenderContext<'_>) -> Result<String, ViewError> + Send + Sync + 'static,
{
    Box::new(FnView(render))
}

/// Typed registry from component key to view factory
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    factories: HashMap<String, ViewFactory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `key`, replacing any previous one
    pub fn register<F>(&mut self, key: &str, factory: F)
    where
        F: Fn() -> Result<Box<dyn View>, ViewError> + Send + Sync + 'static,
    {
        self.factories.insert(key.to_string(), Arc::new(factory));
    }

    /// Register a stateless view type
    pub fn register_view<V>(&mut self, key: &str)
    where
        V: View + Default + 'static,
    {
        self.register(key, || Ok(Box::new(V::default()) as Box<dyn View>));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Build the view registered under `key`.
    pub fn instantiate(&self, key: &str) -> Result<Box<dyn View>, ViewError> {
        let factory = self
            .factories
            .get(key)
            .ok_or_else(|| ViewError::UnknownComponent(key.to_string()))?;
        factory()
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.factories.keys().collect();
        keys.sort();
        f.debug_struct("ComponentRegistry").field("components", &keys).finish()
    }
}
