use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::router::path;
use crate::ui_bridge::Layout;

/// Who a route is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Admin shell only
    Admin,
    /// Resident shell only
    Resident,
    /// Visible in both shells
    Both,
}

impl Audience {
    /// Whether a route with this audience can be shown inside `layout`.
    pub fn admits(self, layout: Layout) -> bool {
        match self {
            Audience::Both => true,
            Audience::Admin => layout == Layout::Admin,
            Audience::Resident => layout == Layout::Resident,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Admin => "admin",
            Audience::Resident => "resident",
            Audience::Both => "both",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Audience::Admin),
            "resident" => Ok(Audience::Resident),
            "both" => Ok(Audience::Both),
            other => Err(format!("Unknown audience '{}'", other)),
        }
    }
}

/// The three route tables a plugin may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteCollection {
    /// Unified `routes` table, shared by both shells
    Legacy,
    /// `adminRoutes`
    Admin,
    /// `residentRoutes`
    Resident,
}

impl RouteCollection {
    /// Audience every route in this table has unless narrowed explicitly
    pub fn implicit_audience(self) -> Audience {
        match self {
            RouteCollection::Legacy => Audience::Both,
            RouteCollection::Admin => Audience::Admin,
            RouteCollection::Resident => Audience::Resident,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteCollection::Legacy => "routes",
            RouteCollection::Admin => "adminRoutes",
            RouteCollection::Resident => "residentRoutes",
        }
    }
}

/// One routable unit inside a plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRoute {
    /// Pattern relative to the plugin base path; empty is the plugin root
    #[serde(default)]
    pub path: String,

    /// Key of the view factory in the component registry
    pub component: String,

    /// Navigation title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Navigation icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Explicit audience; only narrows routes in the legacy table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<Audience>,
}

impl PluginRoute {
    pub fn new(path: &str, component: &str) -> Self {
        Self {
            path: path.to_string(),
            component: component.to_string(),
            title: None,
            icon: None,
            audience: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_audience(mut self, audience: Audience) -> Self {
        self.audience = Some(audience);
        self
    }

    /// Route path without leading or trailing slashes
    pub fn normalized_path(&self) -> &str {
        path::normalize(&self.path)
    }

    /// Audience of this route when it sits in `collection`.
    ///
    /// Audience-specific tables always win over an explicit tag.
    pub fn effective_audience(&self, collection: RouteCollection) -> Audience {
        match collection {
            RouteCollection::Legacy => self.audience.unwrap_or(Audience::Both),
            other => other.implicit_audience(),
        }
    }
}
