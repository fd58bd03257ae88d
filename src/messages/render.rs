//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::models::ViewState;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub view: ViewState,

    // Endpoints
    pub items_url: String,
    pub docs_url: String,

    // List navigation
    pub selected: usize,

    // Status bar
    pub last_fetch_ms: Option<u64>,
    pub last_loaded_at: Option<DateTime<Local>>,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    /// Render state before the App layer has reported anything
    pub fn initial(config: &Config) -> Self {
        RenderState {
            view: ViewState::default(),
            items_url: config.items_url(),
            docs_url: config.docs_url(),
            selected: 0,
            last_fetch_ms: None,
            last_loaded_at: None,
            show_help: false,
        }
    }

    /// The refresh control is disabled while a fetch is in flight
    pub fn refresh_enabled(&self) -> bool {
        !self.view.loading
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::initial(&Config::default())
    }
}
