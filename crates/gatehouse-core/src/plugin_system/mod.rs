//! # Gatehouse Core Plugin System
//!
//! Everything needed to turn plugin definitions into the immutable
//! [`PluginSet`] the router works on.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`manifest`]**: static plugin descriptor ([`PluginManifest`]) with its
//!   menu metadata.
//! - **[`route`]**: one routable unit ([`PluginRoute`]) and its [`Audience`].
//! - **[`registry`]**: the runtime aggregate ([`LoadedPlugin`]) and the ordered
//!   snapshot of all of them ([`PluginSet`]).
//! - **[`catalog`]**: descriptors served by the backend catalog and the remote
//!   source that fetches them.
//! - **[`loader`]**: load strategies and the fallback chain ([`PluginLoader`]).
//! - **[`conflict`]**: base-path collision and shadowing detection.
//! - **[`error`]**: [`PluginSystemError`](error::PluginSystemError).
pub mod catalog;
pub mod conflict;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod registry;
pub mod route;

pub use catalog::{PluginDescriptor, RemoteCatalogSource};
pub use conflict::{BasePathPolicy, ConflictType, PluginConflict};
pub use loader::{DirectoryPluginSource, PluginLoader, PluginSource, StaticPluginSource};
pub use manifest::{ManifestBuilder, MenuEntry, PluginManifest};
pub use registry::{LoadedPlugin, PluginSet};
pub use route::{Audience, PluginRoute, RouteCollection};
// Test module declaration
#[cfg(test)]
mod tests;
