//! # itemdeck
//!
//! A terminal viewer for an items API.
//!
//! ## Features
//! - Fetches `GET {base_url}/items/` on startup
//! - Manual refresh, rejected while a fetch is in flight
//! - Loading, error and empty states (with a link to the API docs)
//! - Cancels the in-flight fetch on exit
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use error::FetchError;
pub use models::{Item, ViewState};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::NetworkActor;
