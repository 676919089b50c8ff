//! # Gatehouse Core
//!
//! Routing core of the Gatehouse visitor-management dashboard. Plugins
//! contribute route tables under a base path; this crate loads them, matches
//! request paths against them and renders the matched view inside a
//! plugin-scoped fault boundary.
pub mod kernel;
pub mod plugin_system;
pub mod router;
pub mod storage;
pub mod ui_bridge;

// Re-export key public types for the binary and the bundled plugins
pub use kernel::error::Error as KernelError;
pub use kernel::session::{Navigation, NavigationSession};
pub use plugin_system::{Audience, LoadedPlugin, PluginLoader, PluginManifest, PluginRoute, PluginSet};
pub use router::{find_plugin_route_and_type, RouteMatch};
pub use storage::DashboardConfig;
pub use ui_bridge::{ComponentRegistry, Layout, Page, RenderDispatcher, View};

#[cfg(test)]
mod tests;
