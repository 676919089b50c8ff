//! # Gatehouse Core UI Bridge Errors
//!
//! [`ViewError`] is what a plugin view, or its construction, can fail with.
//! Every variant is caught by the plugin's fault boundary and turned into a
//! plugin error panel.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Component '{0}' is not registered")]
    UnknownComponent(String),

    #[error("Failed to construct component '{component}': {message}")]
    Construction { component: String, message: String },

    #[error("Render failed: {0}")]
    Render(String),

    #[error("Plugin '{plugin}' panicked while rendering: {message}")]
    Panicked { plugin: String, message: String },
}
