//! # Gatehouse Core Kernel
//!
//! Shared error types, system-wide constants and the navigation session that
//! ties loading, matching and dispatch together for one dashboard client.
//!
//! - **Error Handling**: [`Error`](error::Error) wraps every subsystem error,
//!   with a `Result` alias in the `error` submodule.
//! - **Constants**: endpoint names and defaults in `constants`.
//! - **Navigation**: [`NavigationSession`](session::NavigationSession) runs one
//!   load-match-render cycle per navigation and drops results that a newer
//!   navigation has made stale.
pub mod constants;
pub mod error;
pub mod session;

pub use error::{Error, Result};
pub use session::{Navigation, NavigationSession};
