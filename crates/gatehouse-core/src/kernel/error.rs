//! # Gatehouse Core Kernel Errors
//!
//! [`Error`] is the top-level error of the crate. Each subsystem defines its
//! own typed error and converts into this one with `?`.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::plugin_system::error::PluginSystemError;
use crate::storage::error::StorageSystemError;

/// Top-level error for dashboard routing operations
#[derive(Debug, ThisError)]
pub enum Error {
    /// Plugin loading, manifest or catalog error
    #[error("Plugin system error: {0}")]
    PluginSystem(#[from] PluginSystemError),

    /// Configuration file error
    #[error("Storage system error: {0}")]
    StorageSystem(#[from] StorageSystemError),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;
