//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the items collection, relative to the base URL
pub const ITEMS_PATH: &str = "/items/";

/// Path of the backend's API documentation, relative to the base URL
pub const DOCS_PATH: &str = "/docs";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "itemdeck.log";

/// Application name
pub const APP_NAME: &str = "itemdeck";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
