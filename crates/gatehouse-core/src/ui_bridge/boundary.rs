use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::error;

use crate::ui_bridge::error::ViewError;

/// Fault-isolation scope for one plugin.
///
/// Panics and errors raised inside [`FaultBoundary::run`] are logged with the
/// plugin name and returned as a [`ViewError`]; they never unwind past the
/// boundary. A boundary holds no state, so recovering means running a fresh
/// render.
#[derive(Debug, Clone, Copy)]
pub struct FaultBoundary<'a> {
    plugin: &'a str,
}

impl<'a> FaultBoundary<'a> {
    pub fn new(plugin: &'a str) -> Self {
        Self { plugin }
    }

    pub fn plugin(&self) -> &str {
        self.plugin
    }

    /// Run `render` inside the boundary.
    pub fn run<F>(&self, render: F) -> Result<String, ViewError>
    where
        F: FnOnce() -> Result<String, ViewError>,
    {
        match panic::catch_unwind(AssertUnwindSafe(render)) {
            Ok(Ok(body)) => Ok(body),
            Ok(Err(e)) => {
                error!("Plugin '{}' failed to render: {}", self.plugin, e);
                Err(e)
            }
            Err(panic_obj) => {
                let message = panic_message(panic_obj.as_ref());
                error!("Plugin '{}' panicked while rendering: {}", self.plugin, message);
                Err(ViewError::Panicked {
                    plugin: self.plugin.to_string(),
                    message,
                })
            }
        }
    }
}

fn panic_message(panic_obj: &(dyn Any + Send)) -> String {
    if let Some(s_ref) = panic_obj.downcast_ref::<&'static str>() {
        (*s_ref).to_string()
    } else if let Some(s_obj) = panic_obj.downcast_ref::<String>() {
        s_obj.clone()
    } else {
        "Unknown panic reason".to_string()
    }
}
