use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::plugin_system::loader::PluginLoader;
use crate::ui_bridge::{Layout, Page, RenderDispatcher};

/// Outcome of one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The page was rendered against a fresh plugin set
    Rendered(Page),
    /// A newer navigation started while this one was loading; its plugin set
    /// was discarded
    Superseded { path: String },
}

impl Navigation {
    pub fn page(&self) -> Option<&Page> {
        match self {
            Navigation::Rendered(page) => Some(page),
            Navigation::Superseded { .. } => None,
        }
    }
}

/// Identifies one navigation within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTicket(u64);

/// Runs load, match and render for each navigation of one dashboard client.
///
/// Every navigation takes a ticket. A load that completes after a newer
/// ticket was issued is dropped, so a slow catalog fetch can never render a
/// route for a page the user already left.
pub struct NavigationSession {
    loader: Arc<PluginLoader>,
    dispatcher: RenderDispatcher,
    generation: AtomicU64,
}

impl NavigationSession {
    pub fn new(loader: Arc<PluginLoader>, dispatcher: RenderDispatcher) -> Self {
        Self {
            loader,
            dispatcher,
            generation: AtomicU64::new(0),
        }
    }

    /// Start a navigation, invalidating every earlier ticket
    pub fn begin(&self) -> NavigationTicket {
        NavigationTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether no navigation started after `ticket`
    pub fn is_current(&self, ticket: NavigationTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Navigate to `path` inside the `layout` shell.
    pub async fn navigate(&self, path: &str, layout: Layout) -> Navigation {
        let ticket = self.begin();
        let plugins = self.loader.load().await;

        if !self.is_current(ticket) {
            debug!("Discarding stale plugin set for '{}'", path);
            return Navigation::Superseded { path: path.to_string() };
        }
        Navigation::Rendered(self.dispatcher.resolve(path, &plugins, layout))
    }
}
