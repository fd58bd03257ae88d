//! Command handlers - business logic for processing UI events and fetch results

use chrono::Local;

use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Fetching
    // ========================

    /// Start a fetch of the items endpoint.
    ///
    /// Returns `None` while another fetch is in flight: only one request
    /// may be outstanding at a time.
    pub fn begin_fetch(&mut self) -> Option<NetworkCommand> {
        if self.pending_request_id.is_some() {
            tracing::debug!(pending = ?self.pending_request_id, "Refresh ignored, fetch already in flight");
            return None;
        }

        let id = self.next_id();
        self.pending_request_id = Some(id);
        self.view.loading = true;
        self.view.error = None;

        Some(NetworkCommand::FetchItems {
            id,
            url: self.items_url.clone(),
        })
    }

    /// Cancel the in-flight fetch, if any. Used at teardown.
    pub fn cancel_fetch(&mut self) -> Option<NetworkCommand> {
        let id = self.pending_request_id.take()?;
        self.view.loading = false;
        Some(NetworkCommand::CancelFetch(id))
    }

    /// Apply a fetch result. Responses for anything but the pending fetch
    /// are dropped.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), pending = ?self.pending_request_id, "Discarding stale response");
            return;
        }

        match response {
            NetworkResponse::Items { items, time_ms, .. } => {
                self.view.items = items;
                self.last_fetch_ms = Some(time_ms);
                self.last_loaded_at = Some(Local::now());
                self.clamp_selection();
            }
            NetworkResponse::Failed { error, time_ms, .. } => {
                self.view.error = Some(error.to_string());
                self.last_fetch_ms = Some(time_ms);
            }
            NetworkResponse::Cancelled { .. } => {}
        }

        self.finalize_fetch();
    }

    /// Release the loading flag. Every terminal response ends up here.
    fn finalize_fetch(&mut self) {
        self.view.loading = false;
        self.pending_request_id = None;
    }

    // ========================
    // List navigation
    // ========================

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.view.items.len() {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.view.items.len().saturating_sub(1));
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
