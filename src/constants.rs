//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the todo API. The `/todos` collection lives under it.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Application name
pub const APP_NAME: &str = "tuido";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
