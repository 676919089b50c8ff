//! # Gatehouse Core Plugin System Errors
//!
//! [`PluginSystemError`] covers failures while producing a plugin set: a load
//! strategy that cannot reach its source, a malformed manifest or descriptor,
//! a catalog that answers with an error, and rejected base-path conflicts.
//! None of these reach the user directly; the loader falls back and logs.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PluginSystemError {
    #[error("Plugin source '{source_name}' failed to load: {source}")]
    LoadingError {
        source_name: String,
        path: Option<PathBuf>,
        #[source]
        source: Box<PluginSystemErrorSource>,
    },

    #[error("Plugin manifest error for '{path}': {message}")]
    ManifestError {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Invalid plugin definition for '{plugin_id}': {message}")]
    InvalidDefinition {
        plugin_id: String,
        message: String,
    },

    #[error("Plugin catalog request to '{url}' failed: {source}")]
    CatalogRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Plugin catalog at '{url}' answered with status {status}")]
    CatalogStatus {
        url: String,
        status: u16,
    },

    #[error("Plugin conflict between '{first_plugin}' and '{second_plugin}': {message}")]
    ConflictError {
        first_plugin: String,
        second_plugin: String,
        message: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PluginSystemErrorSource {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Other: {0}")]
    Other(String),
}
