//! # Gatehouse Core Storage
//!
//! Dashboard configuration files. [`DashboardConfig`](config::DashboardConfig)
//! is read from JSON, YAML or TOML depending on the file extension and the
//! enabled `yaml-config` / `toml-config` features.
pub mod config;
pub mod error;

pub use config::{ConfigFormat, DashboardConfig, LogConfig};
pub use error::StorageSystemError;
