//! # Gatehouse Core Router
//!
//! Pure functions from a request path and a [`PluginSet`](crate::plugin_system::PluginSet)
//! to the route that should render it.
//!
//! - **[`path`]**: normalization helpers shared with the plugin system.
//! - **[`matcher`]**: ownership scan and longest-match route lookup
//!   ([`find_plugin_route_and_type`]).
//! - **[`menu`]**: navigation entries for a shell.
pub mod matcher;
pub mod menu;
pub mod path;

pub use matcher::{find_owner, find_plugin_route_and_type, RouteMatch};
pub use menu::{menu_for, MenuItem};
// Test module declaration
#[cfg(test)]
mod tests;
