//! # Gatehouse Core UI Bridge
//!
//! Turns a resolution result into a [`Page`]: which layout shell hosts it and
//! what goes inside. Plugin views are built from the
//! [`ComponentRegistry`](component::ComponentRegistry) and rendered inside a
//! [`FaultBoundary`](boundary::FaultBoundary) so one broken plugin cannot take
//! down the shell.
pub mod boundary;
pub mod component;
pub mod dispatcher;
pub mod error;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use boundary::FaultBoundary;
pub use component::{view_fn, ComponentRegistry, RenderContext, View, ViewFactory};
pub use dispatcher::RenderDispatcher;
pub use error::ViewError;

/// The two layout shells of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Admin,
    #[default]
    Resident,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Admin => "admin",
            Layout::Resident => "resident",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Layout::Admin),
            "resident" => Ok(Layout::Resident),
            other => Err(format!("Unknown layout '{}', expected 'admin' or 'resident'", other)),
        }
    }
}

/// Manual way out offered on pages that did not render a plugin view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Remount the page from scratch
    Reload,
    /// Go to another page
    NavigateTo(String),
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryAction::Reload => write!(f, "Reload"),
            RecoveryAction::NavigateTo(path) => write!(f, "Go to {}", path),
        }
    }
}

/// What is mounted inside the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// A plugin view rendered successfully
    View { plugin: String, body: String },
    /// No plugin route for the request
    NotFound { path: String },
    /// A plugin view failed; the panel names the plugin
    PluginError { plugin: String, message: String },
}

/// A fully dispatched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub layout: Layout,
    pub title: String,
    pub content: PageContent,
    pub recovery: Option<RecoveryAction>,
}

impl Page {
    pub fn is_not_found(&self) -> bool {
        matches!(self.content, PageContent::NotFound { .. })
    }

    pub fn is_plugin_error(&self) -> bool {
        matches!(self.content, PageContent::PluginError { .. })
    }

    /// Rendered body of a successful plugin view
    pub fn body(&self) -> Option<&str> {
        match &self.content {
            PageContent::View { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{} shell] {}", self.layout, self.title)?;
        match &self.content {
            PageContent::View { body, .. } => writeln!(f, "{}", body)?,
            PageContent::NotFound { path } => writeln!(f, "Page not found: {}", path)?,
            PageContent::PluginError { plugin, message } => {
                writeln!(f, "Plugin '{}' failed to render: {}", plugin, message)?
            }
        }
        if let Some(action) = &self.recovery {
            writeln!(f, "-> {}", action)?;
        }
        Ok(())
    }
}

// Test module declaration
#[cfg(test)]
mod tests;
