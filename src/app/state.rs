//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::messages::RenderState;
use crate::models::ViewState;

/// Main application state - pure data, no I/O
pub struct AppState {
    // What the renderer shows
    pub view: ViewState,

    // Endpoints
    pub items_url: String,
    pub docs_url: String,

    // Fetch tracking
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    pub last_fetch_ms: Option<u64>,
    pub last_loaded_at: Option<DateTime<Local>>,

    // List navigation
    pub selected: usize,

    // Popups
    pub show_help: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            view: ViewState::default(),
            items_url: config.items_url(),
            docs_url: config.docs_url(),
            next_request_id: 1,
            pending_request_id: None,
            last_fetch_ms: None,
            last_loaded_at: None,
            selected: 0,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            view: self.view.clone(),
            items_url: self.items_url.clone(),
            docs_url: self.docs_url.clone(),
            selected: self.selected,
            last_fetch_ms: self.last_fetch_ms,
            last_loaded_at: self.last_loaded_at,
            show_help: self.show_help,
        }
    }
}
